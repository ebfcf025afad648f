use thiserror::Error;

/// Reasons a table cannot be turned into three normalizable columns.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("line {line}: expected 3 columns, found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}: '{token}' is not a number")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: '{token}' is not a finite number")]
    NonFinite { line: usize, token: String },

    #[error("no data rows")]
    Empty,

    #[error("column '{column}' has no positive maximum (max = {max})")]
    NonPositiveMaximum { column: &'static str, max: f64 },

    #[error("reading input")]
    Io(#[from] std::io::Error),
}
