//! # depot-cli: Interactive Command Interpreter
//!
//! The front end of Depot: a prompt loop that parses line-oriented text
//! commands, orchestrates the read-then-write sequences of the
//! reconciler, and renders results as tables.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        One Command's Journey                        │
//! │                                                                     │
//! │  "STOCK BED-1 970 1000"                                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  token::tokenize ──► ["STOCK", "BED-1", "970", "1000"]              │
//! │       │                                                             │
//! │       ├──► history::HistoryLog (raw line, batched append)           │
//! │       ▼                                                             │
//! │  command::Command::parse ──► Command::Stock { .. }                  │
//! │       │         │                                                   │
//! │       │         └── bad integer ──► error::CommandError             │
//! │       ▼                                                             │
//! │  dispatch::Dispatcher ──► depot-db reads ──► depot-core decision    │
//! │       │                          ──► depot-db write                 │
//! │       ▼                                                             │
//! │  render::Render (tables and error text to stdout)                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Recoverable errors print their fixed-format message and the loop
//! continues; anything else from the store terminates the process with a
//! non-zero exit code.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod history;
pub mod render;
pub mod token;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use command::{Command, ParseError, Usage};
pub use dispatch::{run_line, Dispatcher};
pub use error::{Action, CommandError, Field};
