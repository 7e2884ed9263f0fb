//! # Warehouse Repository
//!
//! Database operations for warehouses.
//!
//! ## The Capacity Lookup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              capacity(number) return values                         │
//! │                                                                     │
//! │  None                        warehouse does not exist               │
//! │  Some(Capacity::Unlimited)   exists, no stock limit (NULL column)   │
//! │  Some(Capacity::Limited(c))  exists, limited to c total units       │
//! │                                                                     │
//! │  The reconciler needs all three outcomes: "missing" fails the       │
//! │  command, the other two feed the available-quantity calculation.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use depot_core::{Capacity, Warehouse};

/// Repository for warehouse operations.
#[derive(Debug, Clone)]
pub struct WarehouseRepository {
    pool: SqlitePool,
}

impl WarehouseRepository {
    /// Creates a new WarehouseRepository.
    pub fn new(pool: SqlitePool) -> Self {
        WarehouseRepository { pool }
    }

    /// Inserts a new warehouse. `capacity` of `None` stores NULL, meaning
    /// unbounded storage.
    ///
    /// ## Returns
    /// * `Ok(())` - Warehouse inserted
    /// * `Err(StoreError::Duplicate)` - Warehouse number already exists
    pub async fn insert(&self, number: i64, capacity: Option<i64>) -> DbResult<()> {
        debug!(number = %number, capacity = ?capacity, "Inserting warehouse");

        sqlx::query("INSERT INTO warehouse (warehouse_num, limit_qty) VALUES (?1, ?2)")
            .bind(number)
            .bind(capacity)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Looks up a warehouse's capacity.
    ///
    /// ## Returns
    /// * `Ok(None)` - Warehouse does not exist
    /// * `Ok(Some(capacity))` - Warehouse exists; see [`Capacity`]
    pub async fn capacity(&self, number: i64) -> DbResult<Option<Capacity>> {
        let row: Option<Option<i64>> =
            sqlx::query_scalar("SELECT limit_qty FROM warehouse WHERE warehouse_num = ?1")
                .bind(number)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Capacity::from))
    }

    /// Lists all warehouses, ordered by number.
    pub async fn list(&self) -> DbResult<Vec<Warehouse>> {
        let warehouses = sqlx::query_as::<_, Warehouse>(
            r#"
            SELECT warehouse_num AS number, limit_qty AS capacity
            FROM warehouse
            ORDER BY warehouse_num
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(warehouses)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::StoreError;
    use crate::pool::{Database, DbConfig};
    use depot_core::Capacity;

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_capacity_distinguishes_missing_from_unlimited() {
        let db = db().await;
        let repo = db.warehouses();

        repo.insert(970, None).await.unwrap();
        repo.insert(5, Some(100)).await.unwrap();

        assert_eq!(repo.capacity(970).await.unwrap(), Some(Capacity::Unlimited));
        assert_eq!(
            repo.capacity(5).await.unwrap(),
            Some(Capacity::Limited(100))
        );
        assert_eq!(repo.capacity(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_number_is_rejected() {
        let db = db().await;
        let repo = db.warehouses();

        repo.insert(970, None).await.unwrap();
        let err = repo.insert(970, Some(50)).await.unwrap_err();

        assert!(matches!(err, StoreError::Duplicate { .. }));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_ordered_by_number() {
        let db = db().await;
        let repo = db.warehouses();

        repo.insert(970, None).await.unwrap();
        repo.insert(5, Some(100)).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].number, 5);
        assert_eq!(all[0].capacity, Some(100));
        assert_eq!(all[1].number, 970);
        assert_eq!(all[1].capacity, None);
    }
}
