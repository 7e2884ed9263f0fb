//! # Stock Repository
//!
//! Database operations for per-warehouse stock rows.
//!
//! ## Key Operations
//! - Insert / update of one (warehouse, sku) row
//! - Point lookup of one row
//! - Per-warehouse total (the capacity calculation input)
//! - Per-warehouse listing joined with the catalog
//!
//! The capacity invariant (total never exceeding the warehouse limit) is
//! NOT checked here; the reconciler in depot-core is its sole enforcer.
//! This repository only guarantees the composite key and the foreign
//! keys, both reported as classified [`StoreError`] variants.
//!
//! [`StoreError`]: crate::error::StoreError

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbResult, StoreError};
use depot_core::{StockRow, StockedProduct};

/// Repository for stock row operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = StockRepository::new(pool);
///
/// repo.insert_row("BED-1", 970, 1000).await?;
/// let total = repo.total_for_warehouse(970).await?;
/// ```
#[derive(Debug, Clone)]
pub struct StockRepository {
    pool: SqlitePool,
}

impl StockRepository {
    /// Creates a new StockRepository.
    pub fn new(pool: SqlitePool) -> Self {
        StockRepository { pool }
    }

    /// Inserts a new stock row.
    ///
    /// ## Returns
    /// * `Ok(())` - Row inserted
    /// * `Err(StoreError::Duplicate)` - A row for (warehouse, sku) already exists
    /// * `Err(StoreError::ForeignKey)` - The SKU or warehouse is not on file
    pub async fn insert_row(&self, sku: &str, warehouse_number: i64, qty: i64) -> DbResult<()> {
        debug!(sku = %sku, warehouse = %warehouse_number, qty = %qty, "Inserting stock row");

        sqlx::query("INSERT INTO stock (warehouse_num, SKU, qty) VALUES (?1, ?2, ?3)")
            .bind(warehouse_number)
            .bind(sku)
            .bind(qty)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Replaces the quantity of an existing stock row.
    ///
    /// ## Returns
    /// * `Ok(())` - Row updated
    /// * `Err(StoreError::NotFound)` - No row exists for (warehouse, sku)
    pub async fn update_row(&self, sku: &str, warehouse_number: i64, qty: i64) -> DbResult<()> {
        debug!(sku = %sku, warehouse = %warehouse_number, qty = %qty, "Updating stock row");

        let result = sqlx::query("UPDATE stock SET qty = ?3 WHERE SKU = ?2 AND warehouse_num = ?1")
            .bind(warehouse_number)
            .bind(sku)
            .bind(qty)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(
                "stock",
                format!("({}, {})", warehouse_number, sku),
            ));
        }

        Ok(())
    }

    /// Gets the stock row for one product in one warehouse.
    ///
    /// ## Returns
    /// * `Ok(Some(StockRow))` - Row found
    /// * `Ok(None)` - No such row
    pub async fn get_row(&self, sku: &str, warehouse_number: i64) -> DbResult<Option<StockRow>> {
        let row = sqlx::query_as::<_, StockRow>(
            r#"
            SELECT warehouse_num AS warehouse_number, SKU AS sku, qty AS quantity
            FROM stock
            WHERE warehouse_num = ?1 AND SKU = ?2
            "#,
        )
        .bind(warehouse_number)
        .bind(sku)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Total units stored in a warehouse across all products.
    /// Zero when the warehouse has no stock rows.
    pub async fn total_for_warehouse(&self, warehouse_number: i64) -> DbResult<i64> {
        let total: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(qty), 0) FROM stock WHERE warehouse_num = ?1")
                .bind(warehouse_number)
                .fetch_one(&self.pool)
                .await?;

        Ok(total)
    }

    /// Lists a warehouse's stock joined with the catalog, ordered by SKU.
    pub async fn list_for_warehouse(
        &self,
        warehouse_number: i64,
    ) -> DbResult<Vec<StockedProduct>> {
        let rows = sqlx::query_as::<_, StockedProduct>(
            r#"
            SELECT s.SKU AS sku, p.product_name AS name, s.qty AS quantity
            FROM stock s
            INNER JOIN product p ON p.SKU = s.SKU
            WHERE s.warehouse_num = ?1
            ORDER BY s.SKU
            "#,
        )
        .bind(warehouse_number)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Deletes one stock row.
    ///
    /// Low-level primitive; no interpreter command reaches it, but the
    /// store keeps it alongside the other row operations.
    pub async fn delete_row(&self, sku: &str, warehouse_number: i64) -> DbResult<()> {
        debug!(sku = %sku, warehouse = %warehouse_number, "Deleting stock row");

        sqlx::query("DELETE FROM stock WHERE warehouse_num = ?1 AND SKU = ?2")
            .bind(warehouse_number)
            .bind(sku)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
