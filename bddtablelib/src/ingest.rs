//! Reading TSV input into a `Table`.
//!
//! Lines are trimmed, blank lines dropped, and every surviving line split on
//! the tab character. The first surviving line is the header.
//!
//! Trimming also eats trailing tabs, so a row whose last fields are empty
//! comes out short. Short rows are padded with empty cells up to the header
//! width; rows wider than the header are rejected.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::BddTableError;
use crate::table::{Row, Table};
use crate::Result;

/// Field separator in the input.
pub const SEPARATOR: char = '\t';

/// Read and parse a TSV file.
pub fn read_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BddTableError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(BufReader::new(file), path)
}

/// Parse TSV content from any buffered reader.
///
/// `source` only labels errors; nothing is opened through it.
pub fn parse_table<R: BufRead>(reader: R, source: &Path) -> Result<Table> {
    let mut lines: Vec<(usize, Row)> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|err| BddTableError::InputRead {
            path: source.to_path_buf(),
            source: err,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        lines.push((index + 1, split_line(trimmed)));
    }

    let mut lines = lines.into_iter();
    let (_, header) = lines
        .next()
        .ok_or_else(|| BddTableError::EmptyInput(source.to_path_buf()))?;

    let expected = header.len();
    let mut rows = Vec::new();
    for (line, mut row) in lines {
        if row.len() > expected {
            return Err(BddTableError::RaggedRow {
                line,
                expected,
                found: row.len(),
            });
        }
        row.resize(expected, String::new());
        rows.push(row);
    }

    debug!(
        source = %source.display(),
        columns = expected,
        rows = rows.len(),
        "ingested table"
    );

    Ok(Table::new(header, rows))
}

/// Split a trimmed line into cells.
fn split_line(line: &str) -> Row {
    line.split(SEPARATOR).map(str::to_string).collect()
}
