//! Error types for loading mutation tables and computing statistics over them.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A column required by a statistic is not in the table header.
    #[error("missing required field '{field}'")]
    MissingField { field: String },

    /// An extremum was requested on a table without records.
    #[error("empty input: at least one record is required")]
    EmptyInput,

    /// A row does not have as many values as the header has fields.
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("malformed delimited input: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
