//! # depot-core: Pure Business Logic for Depot
//!
//! This crate is the **heart** of Depot. It contains the stock/unstock
//! reconciliation algorithm as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Depot Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                   CLI (apps/cli)                            │   │
//! │  │    tokenizer ──► dispatcher ──► display / history log       │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ depot-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │   ┌───────────┐              ┌───────────────┐              │   │
//! │  │   │   types   │              │   reconcile   │              │   │
//! │  │   │  Product  │              │  available    │              │   │
//! │  │   │ Warehouse │              │  insert/update│              │   │
//! │  │   │  StockRow │              │  unstock clamp│              │   │
//! │  │   └───────────┘              └───────────────┘              │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                    depot-db (Store)                         │   │
//! │  │          SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Warehouse, StockRow, Capacity)
//! - [`reconcile`] - The capacity-aware stock/unstock quantity algorithm
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Quantities**: Stock levels are whole units (i64), never fractional

// =============================================================================
// Module Declarations
// =============================================================================

pub mod reconcile;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use depot_core::Capacity` instead of
// `use depot_core::types::Capacity`

pub use reconcile::{available_quantity, stock_action, StockAction};
pub use reconcile::{should_unstock, unstocked_quantity};
pub use types::{Capacity, Product, StockRow, StockedProduct, Warehouse};
