//! # Product Repository
//!
//! Database operations for the product catalog.
//!
//! Products are written once by `ADD PRODUCT` and never modified or
//! deleted afterwards, so the surface here is deliberately small: insert
//! and list. SKU uniqueness is enforced by the primary key and surfaces
//! as [`StoreError::Duplicate`].

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use depot_core::Product;

/// Repository for product catalog operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// repo.insert("Mid Century Modern Bed", "BED-4821").await?;
/// let catalog = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product into the catalog.
    ///
    /// ## Returns
    /// * `Ok(())` - Product inserted
    /// * `Err(StoreError::Duplicate)` - SKU already exists
    pub async fn insert(&self, name: &str, sku: &str) -> DbResult<()> {
        debug!(sku = %sku, "Inserting product");

        sqlx::query("INSERT INTO product (SKU, product_name) VALUES (?1, ?2)")
            .bind(sku)
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Lists the whole catalog, ordered by SKU.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT SKU AS sku, product_name AS name
            FROM product
            ORDER BY SKU
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
