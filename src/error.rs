//! # Error Types
//!
//! This module defines error types used throughout the escpos-receipt library.

use thiserror::Error;

/// Main error type for escpos-receipt operations
#[derive(Debug, Error)]
pub enum EscPosError {
    /// The source image could not be decoded or has no pixels
    #[error("Image decode error: {0}")]
    ImageDecode(String),

    /// A table row (or the justification list) does not match the column count.
    ///
    /// `row` is the index of the offending input row, or `None` when the
    /// justification list itself has the wrong length.
    #[error(
        "Column arity mismatch{}: expected {expected} columns, found {found}",
        row_suffix(.row)
    )]
    ColumnArityMismatch {
        row: Option<usize>,
        expected: usize,
        found: usize,
    },

    /// A table column was declared with zero width
    #[error("Invalid width: column {column} must be at least 1 character wide")]
    InvalidWidth { column: usize },

    /// Printer profile could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Transport-level errors, passed through unchanged
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors raised by a [`ByteSink`](crate::transport::ByteSink).
#[derive(Debug, Error)]
pub enum TransportError {
    /// I/O error wrapper
    #[error("Transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sink accepted fewer bytes than were handed to it
    #[error("Short write: {written} of {expected} bytes")]
    ShortWrite { written: usize, expected: usize },
}

impl From<image::ImageError> for EscPosError {
    fn from(err: image::ImageError) -> Self {
        EscPosError::ImageDecode(err.to_string())
    }
}

fn row_suffix(row: &Option<usize>) -> String {
    match row {
        Some(r) => format!(" in row {}", r),
        None => " in justifications".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_message_names_row() {
        let err = EscPosError::ColumnArityMismatch {
            row: Some(2),
            expected: 3,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "Column arity mismatch in row 2: expected 3 columns, found 1"
        );
    }

    #[test]
    fn test_arity_message_for_justifications() {
        let err = EscPosError::ColumnArityMismatch {
            row: None,
            expected: 2,
            found: 3,
        };
        assert!(err.to_string().contains("in justifications"));
    }

    #[test]
    fn test_transport_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: EscPosError = TransportError::from(io).into();
        assert!(err.to_string().starts_with("Transport I/O error"));
    }
}
