//! # Repository Module
//!
//! Database repository implementations for Depot.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  Dispatcher                                                         │
//! │       │                                                             │
//! │       │  db.stock().get_row("BED-1", 970)                           │
//! │       ▼                                                             │
//! │  StockRepository                                                    │
//! │  ├── insert_row(&self, sku, warehouse, qty)                         │
//! │  ├── update_row(&self, sku, warehouse, qty)                         │
//! │  ├── get_row(&self, sku, warehouse)                                 │
//! │  └── total_for_warehouse(&self, warehouse)                          │
//! │       │                                                             │
//! │       │  SQL Query                                                  │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • SQL is isolated in one place                                     │
//! │  • Each operation is a single atomic unit of work                   │
//! │  • Errors are classified once at this boundary                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Catalog inserts and listing
//! - [`warehouse::WarehouseRepository`] - Warehouse inserts, capacity lookup, listing
//! - [`stock::StockRepository`] - Stock row CRUD, per-warehouse totals and listing

pub mod product;
pub mod stock;
pub mod warehouse;
