//! End-to-end command tests: raw input lines through the tokenizer,
//! parser and dispatcher against an in-memory store, with all output
//! captured by the recording renderer.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use depot_cli::dispatch::{run_line, Dispatcher};
use depot_cli::history::HistoryLog;
use depot_cli::render::{RecordedTable, Recording};
use depot_db::{Database, DbConfig};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn scratch_history() -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("depot-cli-test-{}-{}.log", std::process::id(), n))
}

/// An interpreter wired to an in-memory database and a recording renderer.
struct Interpreter {
    dispatcher: Dispatcher<Recording>,
    history: HistoryLog,
    history_path: PathBuf,
}

impl Interpreter {
    async fn start() -> Self {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let history_path = scratch_history();
        Interpreter {
            dispatcher: Dispatcher::new(db, Recording::default()),
            history: HistoryLog::new(&history_path),
            history_path,
        }
    }

    async fn run(&mut self, line: &str) {
        run_line(&mut self.dispatcher, &mut self.history, line)
            .await
            .unwrap();
    }

    fn lines(&self) -> &[String] {
        &self.dispatcher.output().lines
    }

    fn tables(&self) -> &[RecordedTable] {
        &self.dispatcher.output().tables
    }

    fn db(&self) -> &Database {
        self.dispatcher.database()
    }
}

impl Drop for Interpreter {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.history_path);
    }
}

async fn quantity(interp: &Interpreter, sku: &str, warehouse: i64) -> Option<i64> {
    interp
        .db()
        .stock()
        .get_row(sku, warehouse)
        .await
        .unwrap()
        .map(|row| row.quantity)
}

// =============================================================================
// Stocking
// =============================================================================

#[tokio::test]
async fn stock_inserts_then_updates_in_unlimited_warehouse() {
    let mut interp = Interpreter::start().await;
    interp.run(r#"ADD PRODUCT "Bed" BED-1"#).await;
    interp.run("ADD WAREHOUSE 970").await;

    interp.run("STOCK BED-1 970 1000").await;
    assert_eq!(quantity(&interp, "BED-1", 970).await, Some(1000));

    interp.run("STOCK BED-1 970 1000").await;
    assert_eq!(quantity(&interp, "BED-1", 970).await, Some(2000));

    // Both movements were silent
    assert!(interp.lines().is_empty());
}

#[tokio::test]
async fn stock_is_clamped_to_capacity() {
    let mut interp = Interpreter::start().await;
    interp.run(r#"ADD PRODUCT "Chair" CHAIR-1"#).await;
    interp.run("ADD WAREHOUSE 5 100").await;

    interp.run("STOCK CHAIR-1 5 150").await;
    assert_eq!(quantity(&interp, "CHAIR-1", 5).await, Some(100));
}

#[tokio::test]
async fn capacity_is_never_exceeded_across_commands() {
    let mut interp = Interpreter::start().await;
    interp.run(r#"ADD PRODUCT "Bed" BED-1"#).await;
    interp.run(r#"ADD PRODUCT "Chair" CHAIR-1"#).await;
    interp.run("ADD WAREHOUSE 5 100").await;

    interp.run("STOCK BED-1 5 60").await;
    interp.run("STOCK CHAIR-1 5 60").await;
    interp.run("STOCK BED-1 5 60").await;

    let total = interp.db().stock().total_for_warehouse(5).await.unwrap();
    assert_eq!(total, 100);
    // The second shipment only partially fit
    assert_eq!(quantity(&interp, "CHAIR-1", 5).await, Some(40));
}

#[tokio::test]
async fn stock_unknown_sku_reports_product_not_found() {
    let mut interp = Interpreter::start().await;
    interp.run("ADD WAREHOUSE 970").await;

    interp.run("STOCK GHOST-1 970 10").await;

    assert_eq!(
        interp.lines(),
        ["ERROR STOCKING WAREHOUSE with SKU GHOST-1\nPRODUCT DOES NOT EXIST"]
    );
    assert_eq!(quantity(&interp, "GHOST-1", 970).await, None);
}

#[tokio::test]
async fn stock_unknown_warehouse_reports_warehouse_not_found() {
    let mut interp = Interpreter::start().await;
    interp.run(r#"ADD PRODUCT "Bed" BED-1"#).await;

    interp.run("STOCK BED-1 42 10").await;

    assert_eq!(
        interp.lines(),
        ["ERROR STOCKING WAREHOUSE with WAREHOUSE# 42\nWAREHOUSE DOES NOT EXIST"]
    );
}

#[tokio::test]
async fn stock_into_full_warehouse_stores_a_zero_row() {
    let mut interp = Interpreter::start().await;
    interp.run(r#"ADD PRODUCT "Bed" BED-1"#).await;
    interp.run(r#"ADD PRODUCT "Chair" CHAIR-1"#).await;
    interp.run("ADD WAREHOUSE 5 100").await;
    interp.run("STOCK BED-1 5 100").await;

    // No room left: the computed quantity is zero and is written as-is
    interp.run("STOCK CHAIR-1 5 25").await;

    assert_eq!(quantity(&interp, "CHAIR-1", 5).await, Some(0));
    assert_eq!(interp.db().stock().total_for_warehouse(5).await.unwrap(), 100);
}

// =============================================================================
// Unstocking
// =============================================================================

#[tokio::test]
async fn unstock_reduces_by_requested_quantity() {
    let mut interp = Interpreter::start().await;
    interp.run(r#"ADD PRODUCT "Bed" BED-1"#).await;
    interp.run("ADD WAREHOUSE 970").await;
    interp.run("STOCK BED-1 970 80").await;

    interp.run("UNSTOCK BED-1 970 30").await;
    assert_eq!(quantity(&interp, "BED-1", 970).await, Some(50));
}

#[tokio::test]
async fn unstock_never_goes_below_zero() {
    let mut interp = Interpreter::start().await;
    interp.run(r#"ADD PRODUCT "Bed" BED-1"#).await;
    interp.run("ADD WAREHOUSE 970").await;
    interp.run("STOCK BED-1 970 50").await;

    interp.run("UNSTOCK BED-1 970 500").await;
    assert_eq!(quantity(&interp, "BED-1", 970).await, Some(0));
}

#[tokio::test]
async fn unstock_unstocked_sku_reports_product_not_found_without_writing() {
    let mut interp = Interpreter::start().await;
    interp.run(r#"ADD PRODUCT "Bed" BED-1"#).await;
    interp.run(r#"ADD PRODUCT "Couch" COUCH-1"#).await;
    interp.run("ADD WAREHOUSE 970").await;
    interp.run("STOCK BED-1 970 40").await;

    // The warehouse holds stock, just not this SKU
    interp.run("UNSTOCK COUCH-1 970 500").await;

    assert_eq!(
        interp.lines(),
        ["ERROR UNSTOCKING WAREHOUSE with SKU COUCH-1\nPRODUCT DOES NOT EXIST"]
    );
    assert_eq!(quantity(&interp, "BED-1", 970).await, Some(40));
    assert_eq!(quantity(&interp, "COUCH-1", 970).await, None);
}

#[tokio::test]
async fn unstock_from_empty_warehouse_succeeds_silently() {
    let mut interp = Interpreter::start().await;
    interp.run(r#"ADD PRODUCT "Bed" BED-1"#).await;
    interp.run("ADD WAREHOUSE 970").await;

    interp.run("UNSTOCK BED-1 970 10").await;

    assert!(interp.lines().is_empty());
}

#[tokio::test]
async fn unstock_from_warehouse_at_its_limit_is_skipped() {
    let mut interp = Interpreter::start().await;
    interp.run(r#"ADD PRODUCT "Bed" BED-1"#).await;
    interp.run("ADD WAREHOUSE 5 100").await;
    interp.run("STOCK BED-1 5 100").await;

    // The proceed gate computes zero room and skips the row entirely
    interp.run("UNSTOCK BED-1 5 10").await;

    assert!(interp.lines().is_empty());
    assert_eq!(quantity(&interp, "BED-1", 5).await, Some(100));
}

#[tokio::test]
async fn unstock_unknown_warehouse_reports_warehouse_not_found() {
    let mut interp = Interpreter::start().await;

    interp.run("UNSTOCK BED-1 42 10").await;

    assert_eq!(
        interp.lines(),
        ["ERROR UNSTOCKING WAREHOUSE with WAREHOUSE# 42\nWAREHOUSE DOES NOT EXIST"]
    );
}

// =============================================================================
// Catalog Commands
// =============================================================================

#[tokio::test]
async fn duplicate_product_reports_already_exists() {
    let mut interp = Interpreter::start().await;
    let sku = "5ce956fa-a71e-4bfb-b6ae-5eeaa5eb0a70";

    interp.run(&format!(r#"ADD PRODUCT "Bed" {sku}"#)).await;
    interp.run(&format!(r#"ADD PRODUCT "Trunk" {sku}"#)).await;

    assert_eq!(
        interp.lines(),
        [format!("ERROR ADDING PRODUCT with SKU {sku}\nALREADY EXISTS")]
    );
    assert_eq!(interp.db().products().list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_warehouse_reports_already_exists() {
    let mut interp = Interpreter::start().await;

    interp.run("ADD WAREHOUSE 970").await;
    interp.run("ADD WAREHOUSE 970 50").await;

    assert_eq!(
        interp.lines(),
        ["ERROR ADDING WAREHOUSE with WAREHOUSE# 970\nALREADY EXISTS"]
    );
    assert_eq!(interp.db().warehouses().list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn add_warehouse_rejects_non_integer_number() {
    let mut interp = Interpreter::start().await;

    interp.run("ADD WAREHOUSE abc").await;

    assert_eq!(
        interp.lines(),
        ["ERROR ADDING WAREHOUSE with WAREHOUSE# abc\nWAREHOUSE# NOT INTEGER"]
    );
    assert!(interp.db().warehouses().list().await.unwrap().is_empty());
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn list_products_shows_quoted_names_and_is_idempotent() {
    let mut interp = Interpreter::start().await;
    interp
        .run(r#"ADD PRODUCT "Mid Century Modern Bed" BED-4821"#)
        .await;

    interp.run("LIST PRODUCTS").await;
    interp.run("LIST PRODUCTS").await;

    let tables = interp.tables();
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].headers, vec!["SKU", "PRODUCT NAME"]);
    assert_eq!(
        tables[0].rows,
        vec![vec!["BED-4821", "Mid Century Modern Bed"]]
    );
    // Listing has no side effects: the second table is identical
    assert_eq!(tables[0], tables[1]);
}

#[tokio::test]
async fn list_warehouses_marks_unlimited_capacity() {
    let mut interp = Interpreter::start().await;
    interp.run("ADD WAREHOUSE 970").await;
    interp.run("ADD WAREHOUSE 5 100").await;

    interp.run("LIST WAREHOUSES").await;

    let tables = interp.tables();
    assert_eq!(tables[0].headers, vec!["WAREHOUSE#", "STOCK_LIMIT"]);
    assert_eq!(tables[0].rows, vec![vec!["5", "100"], vec!["970", "-"]]);
}

#[tokio::test]
async fn list_warehouse_shows_its_stock() {
    let mut interp = Interpreter::start().await;
    interp.run(r#"ADD PRODUCT "Bed" BED-1"#).await;
    interp.run(r#"ADD PRODUCT "Chair" CHAIR-1"#).await;
    interp.run("ADD WAREHOUSE 970").await;
    interp.run("STOCK CHAIR-1 970 7").await;
    interp.run("STOCK BED-1 970 3").await;

    interp.run("LIST WAREHOUSE 970").await;

    let tables = interp.tables();
    assert_eq!(tables[0].headers, vec!["SKU", "PRODUCT NAME", "QTY"]);
    assert_eq!(
        tables[0].rows,
        vec![
            vec!["BED-1", "Bed", "3"],
            vec!["CHAIR-1", "Chair", "7"],
        ]
    );
}

#[tokio::test]
async fn list_unknown_warehouse_reports_warehouse_not_found() {
    let mut interp = Interpreter::start().await;

    interp.run("LIST WAREHOUSE 42").await;

    assert_eq!(
        interp.lines(),
        ["ERROR LISTING WAREHOUSE with WAREHOUSE# 42\nWAREHOUSE DOES NOT EXIST"]
    );
    assert!(interp.tables().is_empty());
}

// =============================================================================
// Interpreter Plumbing
// =============================================================================

#[tokio::test]
async fn lowercase_commands_work_end_to_end() {
    let mut interp = Interpreter::start().await;
    interp.run(r#"add product "Bed" BED-1"#).await;
    interp.run("add warehouse 970").await;
    interp.run("stock BED-1 970 12").await;

    assert_eq!(quantity(&interp, "BED-1", 970).await, Some(12));
}

#[tokio::test]
async fn unknown_command_prints_the_full_usage() {
    let mut interp = Interpreter::start().await;

    interp.run("FROBNICATE THE WAREHOUSE").await;

    let lines = interp.lines();
    // Heading, blank, seven formats, blank
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "Invalid command, commands available are:");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], r#"    ADD PRODUCT "PRODUCT NAME" SKU"#);
    assert_eq!(lines[9], "");
}

#[tokio::test]
async fn history_records_accepted_lines_in_batches() {
    let mut interp = Interpreter::start().await;

    interp.run("ADD WAREHOUSE 970").await;
    interp.run("LIST WAREHOUSES").await;

    let contents = std::fs::read_to_string(&interp.history_path).unwrap();
    assert_eq!(contents, "ADD WAREHOUSE 970\nLIST WAREHOUSES\n");
}
