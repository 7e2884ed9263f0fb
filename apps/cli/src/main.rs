//! # depot: Command-Line Inventory Manager
//!
//! Interactive prompt over the Depot store.
//!
//! ## Usage
//! ```bash
//! # Default database (./depot.db) and history (./history.log)
//! depot
//!
//! # Custom locations
//! DEPOT_DB=/var/lib/depot/depot.db DEPOT_HISTORY=/var/log/depot.log depot
//! ```
//!
//! ## Exit Codes
//! - 0: clean shutdown (end of input)
//! - 1: unexpected storage failure
//!
//! Logs go to stderr (`RUST_LOG` controls the filter); stdout carries
//! only command output.

use std::io::{self, BufRead, Write};
use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use depot_cli::config::CliConfig;
use depot_cli::dispatch::{run_line, Dispatcher};
use depot_cli::history::HistoryLog;
use depot_cli::render::Console;
use depot_db::{Database, DbConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = CliConfig::load();
    info!(
        db = %config.database_path.display(),
        history = %config.history_path.display(),
        "Starting depot"
    );

    let db = match Database::new(DbConfig::new(&config.database_path)).await {
        Ok(db) => db,
        Err(err) => {
            error!(error = %err, "Failed to open the store");
            process::exit(1);
        }
    };

    let mut dispatcher = Dispatcher::new(db.clone(), Console::new());
    let mut history = HistoryLog::new(&config.history_path);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let Some(line) = lines.next() else {
            break;
        };
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                error!(error = %err, "Failed to read input");
                history.flush();
                process::exit(1);
            }
        };

        if let Err(err) = run_line(&mut dispatcher, &mut history, &line).await {
            // Unclassified storage failures are fatal by policy
            error!(error = %err, "Unexpected storage failure");
            history.flush();
            process::exit(1);
        }
    }

    history.flush();
    println!("Have a great day!");
    db.close().await;
}
