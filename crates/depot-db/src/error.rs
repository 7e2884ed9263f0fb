//! # Store Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  SQLite Error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← classified ONCE at the sqlx boundary    │
//! │       │                                                             │
//! │       ├── Duplicate / ForeignKey / NotFound → recoverable,          │
//! │       │   mapped to a fixed-format message by the dispatcher        │
//! │       │                                                             │
//! │       └── everything else → fatal, the process terminates           │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers match on variants, never on raw SQLite codes or message text.

use thiserror::Error;

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide the classification the
/// command layer branches on. Anything not covered by a named variant is
/// an unexpected storage fault.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - Updating a stock row that does not exist
    #[error("{entity} not found: {key}")]
    NotFound { entity: String, key: String },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting a duplicate product SKU
    /// - Inserting a duplicate warehouse number
    /// - Inserting a second stock row for the same (warehouse, sku)
    #[error("duplicate {field}: '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - Stocking a SKU that is not in the product catalog
    #[error("foreign key violation: {message}")]
    ForeignKey { message: String },

    /// Database connection failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Internal database error.
    #[error("internal database error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and key.
    pub fn not_found(entity: impl Into<String>, key: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            key: key.into(),
        }
    }

    /// True for the constraint-violation variants a just-checked write can
    /// still trip over (duplicate composite key, dangling foreign key).
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            StoreError::Duplicate { .. } | StoreError::ForeignKey { .. }
        )
    }
}

/// Convert sqlx errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → StoreError::NotFound
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolClosed     → StoreError::ConnectionFailed
/// Other                       → StoreError::Internal
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound {
                entity: "record".to_string(),
                key: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                // UNIQUE constraint: "UNIQUE constraint failed: <table>.<column>"
                // FK constraint: "FOREIGN KEY constraint failed"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    StoreError::Duplicate {
                        field,
                        value: "unknown".to_string(),
                    }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    StoreError::ForeignKey {
                        message: msg.to_string(),
                    }
                } else {
                    StoreError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => {
                StoreError::ConnectionFailed("pool timed out".to_string())
            }

            sqlx::Error::PoolClosed => StoreError::ConnectionFailed("pool is closed".to_string()),

            _ => StoreError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
