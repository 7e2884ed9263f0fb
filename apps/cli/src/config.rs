//! # CLI Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults; there are no required settings.

use std::env;
use std::path::PathBuf;

/// Interpreter configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// SQLite database file. Created on first run.
    pub database_path: PathBuf,

    /// Command history log file.
    pub history_path: PathBuf,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable        | Default         |
    /// |-----------------|-----------------|
    /// | `DEPOT_DB`      | `./depot.db`    |
    /// | `DEPOT_HISTORY` | `./history.log` |
    pub fn load() -> Self {
        CliConfig {
            database_path: env::var("DEPOT_DB")
                .unwrap_or_else(|_| "./depot.db".to_string())
                .into(),
            history_path: env::var("DEPOT_HISTORY")
                .unwrap_or_else(|_| "./history.log".to_string())
                .into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
