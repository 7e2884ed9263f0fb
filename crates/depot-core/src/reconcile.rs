//! # Stock Reconciliation
//!
//! The capacity-aware quantity algorithm. Given a warehouse's optional
//! limit, its current total occupancy, and a requested delta, these
//! functions decide how much actually moves and whether the write is an
//! insert or an update of an existing stock row.
//!
//! ## Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    STOCK SKU WAREHOUSE# QTY                         │
//! │                                                                     │
//! │  capacity lookup ──► total lookup ──► available_quantity()          │
//! │                                            │                        │
//! │                       row lookup ──────────┤                        │
//! │                                            ▼                        │
//! │                                      stock_action()                 │
//! │                              ┌─────────────┴─────────────┐          │
//! │                              ▼                           ▼          │
//! │                    Insert { available }      Update { qty + avail } │
//! │                                                                     │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                   UNSTOCK SKU WAREHOUSE# QTY                        │
//! │                                                                     │
//! │  capacity lookup ──► total lookup ──► should_unstock()              │
//! │                                            │                        │
//! │                  false ── trivial success, no row is touched        │
//! │                  true  ── row lookup ──► unstocked_quantity()       │
//! │                                          max(qty - requested, 0)    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The caller performs the lookups in exactly this order; every function
//! here is pure so the whole decision is testable without a store.

use crate::types::{Capacity, StockRow};

// =============================================================================
// Available Quantity
// =============================================================================

/// Computes how many units of a request fit into a warehouse.
///
/// ## Rules
/// - Unlimited capacity: the full requested quantity.
/// - Limited capacity: the full requested quantity when the shipment fits
///   entirely (`capacity > requested + current_total`), otherwise only the
///   room that remains under the limit (`capacity - current_total`).
///
/// A warehouse at or over its limit yields a result <= 0. Callers write
/// that value as-is; the command layer does not reject the request.
///
/// ## Example
/// ```rust
/// use depot_core::{available_quantity, Capacity};
///
/// // Fits entirely
/// assert_eq!(available_quantity(Capacity::Limited(100), 10, 50), 50);
/// // Clamped to the remaining room
/// assert_eq!(available_quantity(Capacity::Limited(100), 10, 150), 90);
/// // No limit
/// assert_eq!(available_quantity(Capacity::Unlimited, 10, 150), 150);
/// ```
pub fn available_quantity(capacity: Capacity, current_total: i64, requested: i64) -> i64 {
    match capacity {
        Capacity::Unlimited => requested,
        Capacity::Limited(limit) => {
            if limit > requested + current_total {
                requested
            } else {
                limit - current_total
            }
        }
    }
}

// =============================================================================
// Stocking
// =============================================================================

/// The write a STOCK command resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAction {
    /// No row exists for (warehouse, sku): create one.
    Insert { quantity: i64 },
    /// A row exists: replace its quantity.
    Update { quantity: i64 },
}

/// Decides between inserting a fresh stock row and topping up an existing
/// one. `available` is the output of [`available_quantity`].
pub fn stock_action(existing: Option<&StockRow>, available: i64) -> StockAction {
    match existing {
        None => StockAction::Insert {
            quantity: available,
        },
        Some(row) => StockAction::Update {
            quantity: row.quantity + available,
        },
    }
}

// =============================================================================
// Unstocking
// =============================================================================

/// Whether an UNSTOCK command should look up and modify the stock row at
/// all.
///
/// ## Rules
/// - An empty warehouse (total of zero) has nothing to unstock: skip.
/// - A computed available of exactly zero: skip. The gate reuses the
///   [`available_quantity`] room calculation; a negative result does not
///   skip, only zero does.
///
/// The gate only controls whether the command proceeds; the quantity
/// actually removed comes from [`unstocked_quantity`] and ignores the
/// room calculation entirely.
pub fn should_unstock(capacity: Capacity, current_total: i64, requested: i64) -> bool {
    if current_total == 0 {
        return false;
    }

    available_quantity(capacity, current_total, requested) != 0
}

/// New quantity for a stock row after unstocking.
///
/// The reduction uses the raw requested quantity, clamped so the stored
/// value never goes below zero.
///
/// ## Example
/// ```rust
/// use depot_core::unstocked_quantity;
///
/// assert_eq!(unstocked_quantity(80, 30), 50);
/// // Requesting more than is stored empties the row
/// assert_eq!(unstocked_quantity(80, 500), 0);
/// ```
pub fn unstocked_quantity(existing_quantity: i64, requested: i64) -> i64 {
    (existing_quantity - requested).max(0)
}

// =============================================================================
// Unit Tests
// =============================================================================
