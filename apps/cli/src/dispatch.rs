//! # Command Dispatcher
//!
//! Routes typed commands to the store, running the reconciler's
//! read-then-write sequences in their required order.
//!
//! ## Read Order Is Part of the Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              STOCK / UNSTOCK sequencing                             │
//! │                                                                     │
//! │  1. capacity lookup        (missing warehouse fails here)           │
//! │  2. warehouse total        (input to the room calculation)          │
//! │  3. existing row lookup    (insert vs update decision)              │
//! │  4. decide                 (pure, depot-core)                       │
//! │  5. write                  (insert or update exactly one row)       │
//! │                                                                     │
//! │  Later steps depend on earlier results, and the ordering decides    │
//! │  which error surfaces first. No two store calls of one command      │
//! │  ever overlap.                                                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Policy
//! Recoverable failures (duplicates, missing product/warehouse, bad
//! integers) print their fixed-format message through the renderer and
//! resolve to `Ok(())`. Every other [`StoreError`] propagates out of
//! [`Dispatcher::dispatch`]; the binary logs it and exits non-zero.

use tracing::debug;

use depot_core::{available_quantity, should_unstock, stock_action, unstocked_quantity, StockAction};
use depot_db::{Database, DbResult, StoreError};

use crate::command::{Command, ParseError, Usage};
use crate::error::{Action, CommandError, Field};
use crate::history::HistoryLog;
use crate::render::Render;
use crate::token::tokenize;

// =============================================================================
// Dispatcher
// =============================================================================

/// Executes parsed commands against the store and renders the results.
#[derive(Debug)]
pub struct Dispatcher<R: Render> {
    db: Database,
    out: R,
}

impl<R: Render> Dispatcher<R> {
    /// Creates a dispatcher over an open database handle.
    pub fn new(db: Database, out: R) -> Self {
        Dispatcher { db, out }
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// The renderer, for inspecting captured output in tests.
    pub fn output(&self) -> &R {
        &self.out
    }

    /// Prints a recoverable command error.
    fn report(&mut self, err: &CommandError) {
        self.out.line(&err.to_string());
    }

    /// Prints a usage message: heading, blank line, format lines, blank line.
    fn usage(&mut self, usage: &Usage) {
        self.out.line(usage.heading);
        self.out.line("");
        for format in usage.formats {
            self.out.line(format);
        }
        self.out.line("");
    }

    /// Executes one typed command.
    ///
    /// ## Returns
    /// * `Ok(())` - Command completed, or failed recoverably (message printed)
    /// * `Err(StoreError)` - Unexpected storage failure, fatal to the caller
    pub async fn dispatch(&mut self, command: Command) -> DbResult<()> {
        debug!(command = ?command, "Dispatching command");

        match command {
            Command::AddProduct { name, sku } => self.add_product(&name, &sku).await,
            Command::AddWarehouse { number, capacity } => {
                self.add_warehouse(number, capacity).await
            }
            Command::Stock {
                sku,
                warehouse,
                quantity,
            } => self.stock(&sku, warehouse, quantity).await,
            Command::Unstock {
                sku,
                warehouse,
                quantity,
            } => self.unstock(&sku, warehouse, quantity).await,
            Command::ListProducts => self.list_products().await,
            Command::ListWarehouses => self.list_warehouses().await,
            Command::ListWarehouse { number } => self.list_warehouse(number).await,
        }
    }

    // =========================================================================
    // Catalog Commands
    // =========================================================================

    /// ADD PRODUCT "PRODUCT NAME" SKU
    ///
    /// Nothing is printed on success.
    async fn add_product(&mut self, name: &str, sku: &str) -> DbResult<()> {
        match self.db.products().insert(name, sku).await {
            Ok(()) => Ok(()),
            Err(StoreError::Duplicate { .. }) => {
                self.report(&CommandError::already_exists(
                    Action::AddingProduct,
                    Field::Sku,
                    sku,
                ));
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// ADD WAREHOUSE WAREHOUSE# [STOCK_LIMIT]
    async fn add_warehouse(&mut self, number: i64, capacity: Option<i64>) -> DbResult<()> {
        match self.db.warehouses().insert(number, capacity).await {
            Ok(()) => Ok(()),
            Err(StoreError::Duplicate { .. }) => {
                self.report(&CommandError::already_exists(
                    Action::AddingWarehouse,
                    Field::WarehouseNumber,
                    number.to_string(),
                ));
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    // =========================================================================
    // Stock Movement Commands
    // =========================================================================

    /// STOCK SKU WAREHOUSE# QTY
    ///
    /// A limited warehouse accepts only as much of the shipment as fits
    /// under its limit; the rest is silently not stored.
    async fn stock(&mut self, sku: &str, warehouse: i64, quantity: i64) -> DbResult<()> {
        let Some(capacity) = self.db.warehouses().capacity(warehouse).await? else {
            self.report(&CommandError::warehouse_missing(Action::Stocking, warehouse));
            return Ok(());
        };

        let total = self.db.stock().total_for_warehouse(warehouse).await?;
        let available = available_quantity(capacity, total, quantity);
        let existing = self.db.stock().get_row(sku, warehouse).await?;

        match stock_action(existing.as_ref(), available) {
            StockAction::Insert { quantity } => {
                match self.db.stock().insert_row(sku, warehouse, quantity).await {
                    Ok(()) => Ok(()),
                    // The warehouse was confirmed a moment ago, so a
                    // constraint failure here means the SKU is not on file.
                    Err(err) if err.is_constraint_violation() => {
                        self.report(&CommandError::product_missing(Action::Stocking, sku));
                        Ok(())
                    }
                    Err(err) => Err(err),
                }
            }
            // The row's existence was just confirmed: update failures are
            // not user errors and propagate as fatal.
            StockAction::Update { quantity } => {
                self.db.stock().update_row(sku, warehouse, quantity).await
            }
        }
    }

    /// UNSTOCK SKU WAREHOUSE# QTY
    ///
    /// Unstocking never drives a row below zero; requesting more than is
    /// stored empties the row.
    async fn unstock(&mut self, sku: &str, warehouse: i64, quantity: i64) -> DbResult<()> {
        let Some(capacity) = self.db.warehouses().capacity(warehouse).await? else {
            self.report(&CommandError::warehouse_missing(
                Action::Unstocking,
                warehouse,
            ));
            return Ok(());
        };

        let total = self.db.stock().total_for_warehouse(warehouse).await?;
        if !should_unstock(capacity, total, quantity) {
            // Nothing to unstock: trivial success, no row is read or written
            return Ok(());
        }

        match self.db.stock().get_row(sku, warehouse).await? {
            None => {
                self.report(&CommandError::product_missing(Action::Unstocking, sku));
                Ok(())
            }
            Some(row) => {
                let remaining = unstocked_quantity(row.quantity, quantity);
                self.db.stock().update_row(sku, warehouse, remaining).await
            }
        }
    }

    // =========================================================================
    // Listing Commands
    // =========================================================================

    /// LIST PRODUCTS
    async fn list_products(&mut self) -> DbResult<()> {
        let products = self.db.products().list().await?;
        let rows = products
            .into_iter()
            .map(|p| vec![p.sku, p.name])
            .collect();
        self.out.table(&["SKU", "PRODUCT NAME"], rows);
        Ok(())
    }

    /// LIST WAREHOUSES
    async fn list_warehouses(&mut self) -> DbResult<()> {
        let warehouses = self.db.warehouses().list().await?;
        let rows = warehouses
            .into_iter()
            .map(|w| {
                let limit = match w.capacity {
                    Some(limit) => limit.to_string(),
                    None => "-".to_string(),
                };
                vec![w.number.to_string(), limit]
            })
            .collect();
        self.out.table(&["WAREHOUSE#", "STOCK_LIMIT"], rows);
        Ok(())
    }

    /// LIST WAREHOUSE WAREHOUSE#
    async fn list_warehouse(&mut self, number: i64) -> DbResult<()> {
        if self.db.warehouses().capacity(number).await?.is_none() {
            self.report(&CommandError::warehouse_missing(Action::Listing, number));
            return Ok(());
        }

        let stocked = self.db.stock().list_for_warehouse(number).await?;
        let rows = stocked
            .into_iter()
            .map(|s| vec![s.sku, s.name, s.quantity.to_string()])
            .collect();
        self.out.table(&["SKU", "PRODUCT NAME", "QTY"], rows);
        Ok(())
    }
}

// =============================================================================
// Line Handling
// =============================================================================

/// Processes one raw input line end to end: tokenize, log to history,
/// parse, dispatch, render.
///
/// ## Returns
/// * `Ok(())` - Line handled (including recoverable errors and usage text)
/// * `Err(StoreError)` - Unexpected storage failure, fatal to the caller
pub async fn run_line<R: Render>(
    dispatcher: &mut Dispatcher<R>,
    history: &mut HistoryLog,
    line: &str,
) -> DbResult<()> {
    let tokens = tokenize(line);
    if tokens.is_empty() {
        dispatcher.usage(&Usage::unrecognized());
        return Ok(());
    }

    // Accepted input goes to history whether or not it parses further
    history.record(line);

    match Command::parse(&tokens) {
        Ok(command) => dispatcher.dispatch(command).await,
        Err(ParseError::Rejected(err)) => {
            dispatcher.report(&err);
            Ok(())
        }
        Err(ParseError::Usage(usage)) => {
            dispatcher.usage(&usage);
            Ok(())
        }
    }
}
