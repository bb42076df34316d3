//! tablify - Adapt arbitrary in-memory values into SQL-queryable tables
//!
//! Given an already-constructed value (a scalar, a map, a slice of scalars,
//! a slice of slices, or a slice of records), infer a tabular schema and
//! materialize the value as an immutable table behind the [`RowSource`]
//! read contract a SQL execution engine consumes.
//!
//! ```
//! use tablify::{build_table, RowSource, Value};
//!
//! let table = build_table("pairs", Value::from(vec![vec![1i64, 2], vec![3, 4]])).unwrap();
//! assert_eq!(table.names().unwrap(), vec!["c1", "c2"]);
//! assert_eq!(table.types().unwrap(), vec!["int", "int"]);
//! assert_eq!(table.preload_all().len(), 2);
//! ```

pub mod error;
pub mod model;
pub mod source;

pub use error::ShapeError;
pub use model::{Column, ColumnType, Fields, Row, Table, Value};
pub use source::{build_table, RowSource};
