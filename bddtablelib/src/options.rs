//! Conversion options and the labels the converter injects into a table.

/// Prefix marking a cell as a negative (expected-failure) test value.
pub const NEGATIVE_MARKER: &str = "~";

/// Header of the column appended when any row carries a negative marker.
pub const ERROR_COLUMN: &str = "IS_ERROR";

/// Value of the error column for rows that carried a marker.
pub const TRUE_TOKEN: &str = "TRUE";

/// Value of the error column for rows that did not.
pub const FALSE_TOKEN: &str = "FALSE";

/// Options controlling marker detection and the error column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Prefix stripped from data cells
    pub marker: String,
    /// Append the error column when markers are found
    pub append_error_column: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            marker: NEGATIVE_MARKER.to_string(),
            append_error_column: true,
        }
    }
}

impl ConvertOptions {
    /// Create options with the default marker and the error column enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the negative marker prefix
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Builder: enable or disable the error column
    pub fn error_column_enabled(mut self, enabled: bool) -> Self {
        self.append_error_column = enabled;
        self
    }
}
