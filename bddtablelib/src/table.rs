//! In-memory table and negative-marker handling.
//!
//! A `Table` is a header row plus data rows, each an ordered list of cells.
//! Markers are only ever looked for in data rows; the header passes through
//! untouched apart from the optional error column.

use tracing::debug;

use crate::options::{ConvertOptions, ERROR_COLUMN, FALSE_TOKEN, TRUE_TOKEN};

/// An ordered sequence of cells.
pub type Row = Vec<String>;

/// Header plus data rows, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Row,
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table from a header and its data rows.
    pub fn new(header: Row, rows: Vec<Row>) -> Self {
        Table { header, rows }
    }

    /// Number of columns, as given by the header.
    pub fn num_cols(&self) -> usize {
        self.header.len()
    }

    /// Header followed by every data row.
    pub fn all_rows(&self) -> impl Iterator<Item = &Row> {
        std::iter::once(&self.header).chain(self.rows.iter())
    }

    /// Strip one leading `marker` from every data cell that carries it.
    ///
    /// Returns one flag per data row, true when at least one of its cells
    /// was marked. An empty marker matches nothing.
    pub fn strip_markers(&mut self, marker: &str) -> Vec<bool> {
        if marker.is_empty() {
            return vec![false; self.rows.len()];
        }

        self.rows
            .iter_mut()
            .map(|row| {
                let mut flagged = false;
                for cell in row.iter_mut() {
                    if let Some(rest) = cell.strip_prefix(marker) {
                        *cell = rest.to_string();
                        flagged = true;
                    }
                }
                flagged
            })
            .collect()
    }

    /// Append the error column: `label` on the header, and `true_token` or
    /// `false_token` on each data row according to `flags`.
    pub fn append_error_column(
        &mut self,
        flags: &[bool],
        label: &str,
        true_token: &str,
        false_token: &str,
    ) {
        self.header.push(label.to_string());
        for (row, &flagged) in self.rows.iter_mut().zip(flags) {
            let token = if flagged { true_token } else { false_token };
            row.push(token.to_string());
        }
    }

    /// Strip negative markers and, if any row carried one, add the error
    /// column as configured.
    ///
    /// Returns the number of data rows that carried a marker.
    pub fn apply_negative_markers(&mut self, options: &ConvertOptions) -> usize {
        let flags = self.strip_markers(&options.marker);
        let negative_rows = flags.iter().filter(|&&f| f).count();
        debug!(negative_rows, marker = %options.marker, "stripped negative markers");

        if negative_rows > 0 && options.append_error_column {
            self.append_error_column(&flags, ERROR_COLUMN, TRUE_TOKEN, FALSE_TOKEN);
        }

        negative_rows
    }
}
