//! Construction-time errors for table building

use thiserror::Error;

/// Errors raised while classifying an input value and materializing it as a
/// table. All variants are construction-time failures: once `build_table`
/// has returned a table, reads cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The input container has no elements to sample a schema from.
    #[error("cannot derive a schema from an empty {0}")]
    EmptyInput(&'static str),

    /// A materialized row's cell count disagrees with the schema.
    #[error("row {row} has {found} cells but the schema has {expected} columns")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The top-level value matches none of the supported table shapes.
    #[error("cannot build a table from a bare {0} value")]
    UnsupportedShape(&'static str),

    /// An element does not have the same shape as the first element.
    #[error("row {row} is not a {expected} like the first element (found {found})")]
    MixedElements {
        row: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// A record element lacks a field that the schema was derived from.
    #[error("row {row} is missing field `{field}`")]
    MissingField { row: usize, field: String },
}
