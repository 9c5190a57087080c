//! Fixed-width pipe table rendering.
//!
//! Every cell is left-justified to its column's widest cell, counted in
//! characters. The header is followed directly by the data rows; no divider
//! line is ever produced.

use std::io::Write;

use crate::error::BddTableError;
use crate::table::Table;
use crate::Result;

/// Maximum character count of each column across header and data.
pub fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths = vec![0; table.num_cols()];
    for row in table.all_rows() {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

/// Render one row as `| a | b | ... |`.
pub fn render_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect();
    format!("| {} |", padded.join(" | "))
}

/// Render the header and every data row, in order.
pub fn render_lines(table: &Table) -> Vec<String> {
    let widths = column_widths(table);
    table
        .all_rows()
        .map(|row| render_row(row, &widths))
        .collect()
}

/// Write the rendered table, one newline-terminated line per row.
pub fn write_table<W: Write>(table: &Table, mut writer: W) -> Result<()> {
    for line in render_lines(table) {
        writeln!(writer, "{}", line).map_err(BddTableError::OutputWrite)?;
    }
    writer.flush().map_err(BddTableError::OutputWrite)
}
