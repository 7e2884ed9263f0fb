//! # User-Facing Command Errors
//!
//! The recoverable error surface of the interpreter. Every recoverable
//! failure prints one fixed-format message to stdout and the command
//! loop continues; nothing here ever terminates the process.
//!
//! ## Message Format
//! ```text
//! ERROR <VERB>ING <SUBJECT> with <FIELD> <value>
//! <REASON>
//! ```
//!
//! ## Examples
//! ```text
//! ERROR ADDING WAREHOUSE with WAREHOUSE# 970
//! ALREADY EXISTS
//!
//! ERROR STOCKING WAREHOUSE with SKU BED-1
//! PRODUCT DOES NOT EXIST
//! ```
//!
//! The wording is part of the interpreter's contract and is pinned down
//! by the tests below; change it and downstream scripts break.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Action
// =============================================================================

/// The verb-plus-subject phrase of an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddingProduct,
    AddingWarehouse,
    Stocking,
    Unstocking,
    Listing,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phrase = match self {
            Action::AddingProduct => "ADDING PRODUCT",
            Action::AddingWarehouse => "ADDING WAREHOUSE",
            Action::Stocking => "STOCKING WAREHOUSE",
            Action::Unstocking => "UNSTOCKING WAREHOUSE",
            Action::Listing => "LISTING WAREHOUSE",
        };
        f.write_str(phrase)
    }
}

// =============================================================================
// Field
// =============================================================================

/// The argument an error message points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Sku,
    WarehouseNumber,
    StockLimit,
    Qty,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Sku => "SKU",
            Field::WarehouseNumber => "WAREHOUSE#",
            Field::StockLimit => "STOCK_LIMIT",
            Field::Qty => "QTY",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Reason
// =============================================================================

/// The second line of an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    AlreadyExists,
    NotInteger(Field),
    ProductDoesNotExist,
    WarehouseDoesNotExist,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::AlreadyExists => f.write_str("ALREADY EXISTS"),
            Reason::NotInteger(field) => write!(f, "{field} NOT INTEGER"),
            Reason::ProductDoesNotExist => f.write_str("PRODUCT DOES NOT EXIST"),
            Reason::WarehouseDoesNotExist => f.write_str("WAREHOUSE DOES NOT EXIST"),
        }
    }
}

// =============================================================================
// CommandError
// =============================================================================

/// A recoverable, user-facing command failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ERROR {action} with {field} {value}\n{reason}")]
pub struct CommandError {
    pub action: Action,
    pub field: Field,
    pub value: String,
    pub reason: Reason,
}

impl CommandError {
    /// An argument that should have been an integer was not.
    pub fn not_integer(action: Action, field: Field, value: impl Into<String>) -> Self {
        CommandError {
            action,
            field,
            value: value.into(),
            reason: Reason::NotInteger(field),
        }
    }

    /// A product or warehouse insert hit an existing key.
    pub fn already_exists(action: Action, field: Field, value: impl Into<String>) -> Self {
        CommandError {
            action,
            field,
            value: value.into(),
            reason: Reason::AlreadyExists,
        }
    }

    /// The SKU is not in the product catalog.
    pub fn product_missing(action: Action, sku: impl Into<String>) -> Self {
        CommandError {
            action,
            field: Field::Sku,
            value: sku.into(),
            reason: Reason::ProductDoesNotExist,
        }
    }

    /// The warehouse number is not on file.
    pub fn warehouse_missing(action: Action, number: i64) -> Self {
        CommandError {
            action,
            field: Field::WarehouseNumber,
            value: number.to_string(),
            reason: Reason::WarehouseDoesNotExist,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
