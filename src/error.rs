//! Error module
//!
//! Defines the crate's error type using `thiserror`. Sink-side failures from
//! the `csv` crate and `std::io` convert automatically via `From`; the only
//! error originating in this crate is [`EncodeError::UnsupportedType`].

use thiserror::Error;

/// The error type for CSV encoding.
///
/// Errors are never recovered internally: the first one aborts the encode
/// call and is returned to the caller. Rows already flushed to the sink
/// before the failure remain written; no rows after the error point exist.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// A field's kind has no CSV stringification rule.
    ///
    /// Raised during row derivation when [`Record::field`] returns `None`
    /// for a field index, naming the offending field and the zero-based row
    /// it was encountered in. Nested records and collections are the usual
    /// cause.
    ///
    /// [`Record::field`]: crate::Record::field
    #[error("unsupported type for field `{field}` (row {row}): nested records and collections cannot be encoded")]
    UnsupportedType {
        /// Zero-based index of the record being encoded when the failure
        /// occurred.
        row: usize,
        /// Declared name of the field with no stringification rule.
        field: &'static str,
    },

    /// CSV writing error.
    ///
    /// Raised by the underlying `csv::Writer` when a row cannot be written,
    /// including I/O failures surfaced through it.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// General I/O error.
    ///
    /// Raised when flushing the sink or recovering it via
    /// [`Encoder::into_inner`](crate::Encoder::into_inner) fails.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_display_names_field_and_row() {
        let error = EncodeError::UnsupportedType {
            row: 3,
            field: "attachments",
        };
        assert_eq!(
            error.to_string(),
            "unsupported type for field `attachments` (row 3): nested records and collections cannot be encoded"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: EncodeError = io_error.into();
        assert!(matches!(error, EncodeError::Io(_)));
        assert!(error.to_string().contains("IO error"));
    }

    #[test]
    fn test_error_is_debug() {
        let error = EncodeError::UnsupportedType { row: 0, field: "x" };
        assert!(format!("{error:?}").contains("UnsupportedType"));
    }
}
