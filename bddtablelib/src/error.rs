//! Error types for bddtablelib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a TSV file into a BDD table
#[derive(Error, Debug)]
pub enum BddTableError {
    /// Failed to open the input file
    #[error("cannot open input file '{path}': {source}")]
    InputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed while reading lines from the input
    #[error("failed to read input '{path}': {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input contained no non-blank lines
    #[error("input file has no data: {0}")]
    EmptyInput(PathBuf),

    /// A data row has more cells than the header
    #[error("line {line}: found {found} cells, header has {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Failed to create or truncate the output file
    #[error("cannot create output file '{path}': {source}")]
    OutputCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed while writing a rendered line
    #[error("failed to write output: {0}")]
    OutputWrite(#[source] std::io::Error),
}
