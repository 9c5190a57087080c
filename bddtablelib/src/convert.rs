//! End-to-end conversion: ingest, mark negatives, render.

use std::fs::File;
use std::io::{self, BufWriter, Cursor};
use std::path::Path;

use tracing::{debug, info};

use crate::error::BddTableError;
use crate::ingest::{parse_table, read_table};
use crate::options::ConvertOptions;
use crate::render::{render_lines, write_table};
use crate::table::Table;
use crate::Result;

/// What a conversion produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Data rows written (header excluded)
    pub rows: usize,
    /// Columns written, including an appended error column
    pub columns: usize,
    /// Data rows that carried a negative marker
    pub negative_rows: usize,
}

impl ConvertSummary {
    fn of(table: &Table, negative_rows: usize) -> Self {
        ConvertSummary {
            rows: table.rows.len(),
            columns: table.num_cols(),
            negative_rows,
        }
    }
}

/// Convert the TSV file at `input` into a BDD table.
///
/// The table goes to `output` (created or truncated) when given, otherwise to
/// standard output. The output file is only touched once the input has been
/// read successfully.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: Option<&Path>,
    options: &ConvertOptions,
) -> Result<ConvertSummary> {
    let input = input.as_ref();
    let mut table = read_table(input)?;
    let negative_rows = table.apply_negative_markers(options);

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|source| BddTableError::OutputCreate {
                path: path.to_path_buf(),
                source,
            })?;
            write_table(&table, BufWriter::new(file))?;
            debug!(output = %path.display(), "wrote table");
        }
        None => write_table(&table, io::stdout().lock())?,
    }

    let summary = ConvertSummary::of(&table, negative_rows);
    info!(
        input = %input.display(),
        rows = summary.rows,
        columns = summary.columns,
        negative_rows = summary.negative_rows,
        "converted table"
    );
    Ok(summary)
}

/// Convert in-memory TSV content, returning the rendered table.
///
/// Each rendered line is terminated by a newline.
pub fn convert_str(input: &str, options: &ConvertOptions) -> Result<String> {
    let mut table = parse_table(Cursor::new(input), Path::new("<string>"))?;
    table.apply_negative_markers(options);

    let mut output = String::new();
    for line in render_lines(&table) {
        output.push_str(&line);
        output.push('\n');
    }
    Ok(output)
}
