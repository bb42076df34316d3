//! Row-source layer
//!
//! [`RowSource`] is the read contract the query engine consumes. Every
//! table source in the surrounding system implements the same four
//! operations, whether it streams from a file or was materialized in
//! memory, so the engine can treat them polymorphically.

mod memory;
mod shape;

use crate::error::ShapeError;
use crate::model::Row;

pub use memory::build_table;

/// Read contract for a table source.
pub trait RowSource {
    /// Column names in schema order. The error channel exists for contract
    /// uniformity; the in-memory adapter never fails here.
    fn names(&self) -> Result<Vec<String>, ShapeError>;

    /// SQL type strings in schema order, aligned with `names`.
    fn types(&self) -> Result<Vec<String>, ShapeError>;

    /// All rows materialized up front. For the in-memory adapter this is
    /// the sole data-delivery path, and repeated calls return the same rows.
    fn preload_all(&self) -> &[Row];

    /// Incremental cursor for sources that stream. Returns `Ok(None)` at
    /// end-of-data; the in-memory adapter only ever returns that.
    fn read_next(&mut self) -> Result<Option<Row>, ShapeError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn drain(source: &mut dyn RowSource) -> (Vec<String>, Vec<String>, usize) {
        let names = source.names().unwrap();
        let types = source.types().unwrap();
        let mut count = source.preload_all().len();
        while let Some(_row) = source.read_next().unwrap() {
            count += 1;
        }
        (names, types, count)
    }

    #[test]
    fn test_polymorphic_use() {
        let mut table = build_table("t", Value::from(vec![vec![1i64, 2], vec![3, 4]])).unwrap();
        let (names, types, count) = drain(&mut table);
        assert_eq!(names, vec!["c1", "c2"]);
        assert_eq!(types, vec!["int", "int"]);
        assert_eq!(count, 2);
    }
}
