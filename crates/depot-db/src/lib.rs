//! # depot-db: Database Layer for Depot
//!
//! This crate provides database access for the Depot inventory manager.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Depot Data Flow                              │
//! │                                                                     │
//! │  Dispatcher (STOCK / UNSTOCK / ADD / LIST)                          │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                   depot-db (THIS CRATE)                     │   │
//! │  │                                                             │   │
//! │  │   ┌──────────────┐   ┌────────────────┐   ┌─────────────┐  │   │
//! │  │   │   Database   │   │  Repositories  │   │ Migrations  │  │   │
//! │  │   │  (pool.rs)   │   │ (product.rs,   │   │ (embedded)  │  │   │
//! │  │   │              │   │  warehouse.rs, │   │             │  │   │
//! │  │   │ SqlitePool   │◄──│  stock.rs)     │   │ 001_init... │  │   │
//! │  │   └──────────────┘   └────────────────┘   └─────────────┘  │   │
//! │  │                                                             │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite Database (depot.db)                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Typed store errors
//! - [`repository`] - Repository implementations (product, warehouse, stock)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use depot_db::{Database, DbConfig};
//!
//! // Create database with default config (runs migrations)
//! let config = DbConfig::new("path/to/depot.db");
//! let db = Database::new(config).await?;
//!
//! // Use repositories
//! db.products().insert("Mid Century Modern Bed", "BED-4821").await?;
//! let capacity = db.warehouses().capacity(970).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbResult, StoreError};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::stock::StockRepository;
pub use repository::warehouse::WarehouseRepository;
