//! # Display
//!
//! The display collaborator the dispatcher writes through. Keeping it
//! behind a trait means command logic never touches stdout directly and
//! tests can capture output verbatim.

use std::io::{self, Write};

// =============================================================================
// Render Trait
// =============================================================================

/// Output sink for command results.
pub trait Render {
    /// Writes one line of text (error messages, usage text).
    fn line(&mut self, text: &str);

    /// Writes a result table. An empty `rows` still renders the header.
    fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>);
}

// =============================================================================
// Console
// =============================================================================

/// Production renderer: plain text tables on stdout.
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Console
    }
}

impl Render for Console {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }

    fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) {
        let mut stdout = io::stdout().lock();
        // Column widths: max of header and every cell
        let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() && cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }

        let header_line = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        let separator = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ");

        let _ = writeln!(stdout, "{header_line}");
        let _ = writeln!(stdout, "{separator}");
        for row in rows {
            let rendered = row
                .iter()
                .enumerate()
                .map(|(i, cell)| format!("{:<width$}", cell, width = widths.get(i).copied().unwrap_or(0)))
                .collect::<Vec<_>>()
                .join("  ");
            let _ = writeln!(stdout, "{rendered}");
        }
    }
}

// =============================================================================
// Recording
// =============================================================================

/// A table captured by [`Recording`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Test renderer that records everything it is asked to display.
#[derive(Debug, Clone, Default)]
pub struct Recording {
    pub lines: Vec<String>,
    pub tables: Vec<RecordedTable>,
}

impl Render for Recording {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) {
        self.tables.push(RecordedTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        });
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
