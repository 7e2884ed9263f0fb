//! # Command Parsing
//!
//! Turns a token list into a typed [`Command`], validating integer
//! arguments along the way.
//!
//! ## Grammar
//! ```text
//! ADD PRODUCT "PRODUCT NAME" SKU
//! ADD WAREHOUSE WAREHOUSE# [STOCK_LIMIT]
//! STOCK SKU WAREHOUSE# QTY
//! UNSTOCK SKU WAREHOUSE# QTY
//! LIST PRODUCTS
//! LIST WAREHOUSES
//! LIST WAREHOUSE WAREHOUSE#
//! ```
//!
//! Keywords are case-insensitive. Unknown commands and short argument
//! lists come back as a [`Usage`] listing the affected format lines;
//! non-integer arguments come back as a typed [`CommandError`] naming
//! the argument.

use crate::error::{Action, CommandError, Field};

// =============================================================================
// Format Lines
// =============================================================================

const ADD_PRODUCT_FORMAT: &str = r#"    ADD PRODUCT "PRODUCT NAME" SKU"#;
const ADD_WAREHOUSE_FORMAT: &str = "    ADD WAREHOUSE WAREHOUSE# [STOCK_LIMIT]";
const STOCK_FORMAT: &str = "    STOCK SKU WAREHOUSE# QTY";
const UNSTOCK_FORMAT: &str = "    UNSTOCK SKU WAREHOUSE# QTY";
const LIST_PRODUCTS_FORMAT: &str = "    LIST PRODUCTS";
const LIST_WAREHOUSES_FORMAT: &str = "    LIST WAREHOUSES";
const LIST_WAREHOUSE_FORMAT: &str = "    LIST WAREHOUSE WAREHOUSE#";

const ALL_FORMATS: &[&str] = &[
    ADD_PRODUCT_FORMAT,
    ADD_WAREHOUSE_FORMAT,
    STOCK_FORMAT,
    UNSTOCK_FORMAT,
    LIST_PRODUCTS_FORMAT,
    LIST_WAREHOUSES_FORMAT,
    LIST_WAREHOUSE_FORMAT,
];

// =============================================================================
// Usage
// =============================================================================

/// A usage message: a heading plus the relevant command format lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    pub heading: &'static str,
    pub formats: &'static [&'static str],
}

impl Usage {
    /// The full command list, shown for anything unrecognized.
    pub fn unrecognized() -> Self {
        Usage {
            heading: "Invalid command, commands available are:",
            formats: ALL_FORMATS,
        }
    }

    fn similar_commands(formats: &'static [&'static str]) -> Self {
        Usage {
            heading: "Invalid command, similar commands are:",
            formats,
        }
    }

    fn similar_arguments(formats: &'static [&'static str]) -> Self {
        Usage {
            heading: "Invalid argument, similar commands are:",
            formats,
        }
    }

    fn command_format(formats: &'static [&'static str]) -> Self {
        Usage {
            heading: "Invalid argument, the command format is:",
            formats,
        }
    }
}

// =============================================================================
// Command
// =============================================================================

/// A fully parsed, fully typed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddProduct { name: String, sku: String },
    AddWarehouse { number: i64, capacity: Option<i64> },
    Stock { sku: String, warehouse: i64, quantity: i64 },
    Unstock { sku: String, warehouse: i64, quantity: i64 },
    ListProducts,
    ListWarehouses,
    ListWarehouse { number: i64 },
}

/// Why a token list failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A recoverable, fixed-format message (non-integer argument).
    Rejected(CommandError),
    /// A usage message listing the affected command formats.
    Usage(Usage),
}

fn parse_integer(action: Action, field: Field, raw: &str) -> Result<i64, ParseError> {
    raw.parse::<i64>()
        .map_err(|_| ParseError::Rejected(CommandError::not_integer(action, field, raw)))
}

impl Command {
    /// Parses a tokenized line. The first two tokens select the command.
    pub fn parse(tokens: &[String]) -> Result<Command, ParseError> {
        let Some(first) = tokens.first() else {
            return Err(ParseError::Usage(Usage::unrecognized()));
        };
        let keyword = first.to_ascii_lowercase();
        match keyword.as_str() {
            "add" => Self::parse_add(tokens),
            "stock" => Self::parse_movement(tokens, Action::Stocking),
            "unstock" => Self::parse_movement(tokens, Action::Unstocking),
            "list" => Self::parse_list(tokens),
            _ => Err(ParseError::Usage(Usage::unrecognized())),
        }
    }

    fn parse_add(tokens: &[String]) -> Result<Command, ParseError> {
        if tokens.len() < 2 {
            return Err(ParseError::Usage(Usage::similar_commands(&[
                ADD_PRODUCT_FORMAT,
                ADD_WAREHOUSE_FORMAT,
            ])));
        }

        if tokens[1].eq_ignore_ascii_case("product") {
            if tokens.len() < 4 {
                return Err(ParseError::Usage(Usage::command_format(&[
                    ADD_PRODUCT_FORMAT,
                ])));
            }
            Ok(Command::AddProduct {
                name: tokens[2].clone(),
                sku: tokens[3].clone(),
            })
        } else if tokens[1].eq_ignore_ascii_case("warehouse") {
            if tokens.len() < 3 {
                return Err(ParseError::Usage(Usage::command_format(&[
                    ADD_WAREHOUSE_FORMAT,
                ])));
            }
            let number = parse_integer(
                Action::AddingWarehouse,
                Field::WarehouseNumber,
                &tokens[2],
            )?;
            let capacity = if tokens.len() > 3 {
                Some(parse_integer(
                    Action::AddingWarehouse,
                    Field::StockLimit,
                    &tokens[3],
                )?)
            } else {
                None
            };
            Ok(Command::AddWarehouse { number, capacity })
        } else {
            Err(ParseError::Usage(Usage::unrecognized()))
        }
    }

    /// STOCK and UNSTOCK share a shape: SKU WAREHOUSE# QTY.
    fn parse_movement(tokens: &[String], action: Action) -> Result<Command, ParseError> {
        let unstocking = matches!(action, Action::Unstocking);

        if tokens.len() < 4 {
            let format: &'static [&'static str] = if unstocking {
                &[UNSTOCK_FORMAT]
            } else {
                &[STOCK_FORMAT]
            };
            return Err(ParseError::Usage(Usage::similar_arguments(format)));
        }

        let sku = tokens[1].clone();
        let warehouse = parse_integer(action, Field::WarehouseNumber, &tokens[2])?;
        let quantity = parse_integer(action, Field::Qty, &tokens[3])?;

        Ok(if unstocking {
            Command::Unstock {
                sku,
                warehouse,
                quantity,
            }
        } else {
            Command::Stock {
                sku,
                warehouse,
                quantity,
            }
        })
    }

    fn parse_list(tokens: &[String]) -> Result<Command, ParseError> {
        if tokens.len() < 2 {
            return Err(ParseError::Usage(Usage::similar_commands(&[
                LIST_PRODUCTS_FORMAT,
                LIST_WAREHOUSE_FORMAT,
                LIST_WAREHOUSES_FORMAT,
            ])));
        }

        if tokens[1].eq_ignore_ascii_case("products") {
            Ok(Command::ListProducts)
        } else if tokens[1].eq_ignore_ascii_case("warehouses") {
            Ok(Command::ListWarehouses)
        } else if tokens[1].eq_ignore_ascii_case("warehouse") {
            if tokens.len() < 3 {
                return Err(ParseError::Usage(Usage::command_format(&[
                    LIST_WAREHOUSE_FORMAT,
                ])));
            }
            let number = parse_integer(Action::Listing, Field::WarehouseNumber, &tokens[2])?;
            Ok(Command::ListWarehouse { number })
        } else {
            Err(ParseError::Usage(Usage::unrecognized()))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
