//! # bddtablelib
//!
//! Convert tab-separated test-case files into BDD example tables.
//!
//! ## Overview
//!
//! Combinatorial test generators (PICT and friends) emit one test case per
//! line, fields separated by tabs, with a header line naming the parameters.
//! BDD frameworks such as Cucumber want the same data as a pipe-delimited
//! `Examples:` table. This library does that conversion in three phases:
//!
//! - **Ingest**: trim lines, drop blank ones, split on tabs
//! - **Transform**: strip the negative marker (`~`) from data cells and, if
//!   any row carried one, append an `IS_ERROR` column of `TRUE`/`FALSE`
//! - **Render**: pad every column to its widest cell and emit `| a | b |`
//!   lines, header first, with no divider row
//!
//! ## Example
//!
//! ```rust
//! use bddtablelib::{convert_str, ConvertOptions};
//!
//! let table = convert_str("Name\tAge\nAlice\t30\n~Bob\t-5", &ConvertOptions::new()).unwrap();
//! assert_eq!(
//!     table,
//!     "| Name  | Age | IS_ERROR |\n\
//!      | Alice | 30  | FALSE    |\n\
//!      | Bob   | -5  | TRUE     |\n"
//! );
//! ```

pub mod convert;
pub mod error;
pub mod ingest;
pub mod options;
pub mod render;
pub mod table;

pub use convert::{convert_file, convert_str, ConvertSummary};
pub use error::BddTableError;
pub use ingest::{parse_table, read_table};
pub use options::{ConvertOptions, ERROR_COLUMN, FALSE_TOKEN, NEGATIVE_MARKER, TRUE_TOKEN};
pub use render::{column_widths, render_lines, render_row, write_table};
pub use table::{Row, Table};

/// Result type for bddtablelib operations
pub type Result<T> = std::result::Result<T, BddTableError>;
