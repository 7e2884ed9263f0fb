//! # Domain Types
//!
//! Core domain types used throughout Depot.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Product      │   │   Warehouse     │   │    StockRow     │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  sku (PK)       │   │  number (PK)    │   │  warehouse (FK) │   │
//! │  │  name           │   │  capacity?      │   │  sku (FK)       │   │
//! │  └─────────────────┘   └─────────────────┘   │  quantity       │   │
//! │                                              └─────────────────┘   │
//! │  ┌─────────────────┐                                               │
//! │  │    Capacity     │   Absent limit = unbounded storage.           │
//! │  │  ─────────────  │   One capacity pool per warehouse, shared     │
//! │  │  Unlimited      │   across every SKU stocked in it.             │
//! │  │  Limited(i64)   │                                               │
//! │  └─────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products and warehouses are immutable after creation; stock rows are
//! the only mutable state and are keyed by (warehouse, sku).

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A catalog entry. SKUs are globally unique business identifiers
/// (UUID-style strings are common, but any hyphenated token works).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Stock Keeping Unit - primary key.
    pub sku: String,

    /// Display name. Names may repeat across the catalog; SKUs may not.
    pub name: String,
}

// =============================================================================
// Warehouse
// =============================================================================

/// A storage location with an optional total-stock limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Warehouse {
    /// Warehouse number - primary key.
    pub number: i64,

    /// Maximum total units across all products, `None` = unlimited.
    pub capacity: Option<i64>,
}

impl Warehouse {
    /// Returns the capacity as the typed [`Capacity`] used by the reconciler.
    #[inline]
    pub fn capacity(&self) -> Capacity {
        Capacity::from(self.capacity)
    }
}

// =============================================================================
// Capacity
// =============================================================================

/// A warehouse's stock limit.
///
/// The distinction between "exists with unlimited capacity" and "does not
/// exist" is load-bearing for the reconciler, so lookups return
/// `Option<Capacity>` rather than collapsing both into `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capacity {
    /// No stock limit was set at creation.
    Unlimited,
    /// At most this many total units across all products.
    Limited(i64),
}

impl From<Option<i64>> for Capacity {
    fn from(limit: Option<i64>) -> Self {
        match limit {
            Some(limit) => Capacity::Limited(limit),
            None => Capacity::Unlimited,
        }
    }
}

impl Capacity {
    /// Returns the raw limit, `None` when unlimited.
    #[inline]
    pub fn limit(&self) -> Option<i64> {
        match self {
            Capacity::Unlimited => None,
            Capacity::Limited(limit) => Some(*limit),
        }
    }
}

// =============================================================================
// Stock
// =============================================================================

/// Stock level of one product in one warehouse.
/// At most one row exists per (warehouse, sku) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct StockRow {
    /// Warehouse holding the stock.
    pub warehouse_number: i64,

    /// Product being stocked.
    pub sku: String,

    /// Units on hand. Never driven below zero by unstocking.
    pub quantity: i64,
}

/// A product joined with its quantity in a particular warehouse,
/// as produced by the per-warehouse stock listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct StockedProduct {
    pub sku: String,
    pub name: String,
    pub quantity: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
