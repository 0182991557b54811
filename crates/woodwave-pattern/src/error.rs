//! Error types for field construction and board configuration.
//!
//! Generation itself is total; these errors only arise when data enters the
//! crate from outside (hand-built fields, JSON config files).

use thiserror::Error;

/// Errors raised when building a [`BaseField`](crate::field::BaseField) from raw cells.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// Side length of zero.
    #[error("field side must be at least 1")]
    EmptyField,

    /// Cell count does not match `side * side`.
    #[error("expected {expected} cells for a {side}x{side} field, got {actual}")]
    CellCountMismatch {
        /// Declared side length.
        side: usize,
        /// Required cell count.
        expected: usize,
        /// Provided cell count.
        actual: usize,
    },

    /// A row of a nested matrix has the wrong length.
    #[error("row {row} has {len} cells, expected {side}")]
    RaggedRow {
        /// Offending row index.
        row: usize,
        /// Its length.
        len: usize,
        /// Required length.
        side: usize,
    },

    /// A cell holds something other than 0, 2, 4 or 6.
    #[error("cell ({i}, {j}) holds {value}, expected one of 0, 2, 4, 6")]
    InvalidLevel {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
        /// Offending value.
        value: u8,
    },
}

/// Errors from loading or validating a board configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Parameter outside its accepted range.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}
