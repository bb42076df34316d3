//! In-memory table construction
//!
//! [`build_table`] adapts one already-constructed value into a [`Table`] in
//! a single pass: classify the shape, derive the schema from the first
//! element, then materialize every row. The resulting table implements
//! [`RowSource`] with all rows delivered up front via `preload_all`.

use tracing::{debug, trace};

use crate::error::ShapeError;
use crate::model::{Column, ColumnType, Row, Table, Value};

use super::shape::{classify, Shape};
use super::RowSource;

/// Build a table from an arbitrary in-memory value.
///
/// The value must be a scalar, a map, a sequence of scalars, a sequence of
/// sequences, or a sequence of records. The schema is inferred from the
/// first element alone; see the strategy functions for what each shape
/// yields.
pub fn build_table(name: impl Into<String>, value: Value) -> Result<Table, ShapeError> {
    let name = name.into();
    let shape = classify(value)?;
    trace!(table = %name, shape = shape.label(), "classified input value");

    let table = match shape {
        Shape::Scalar(value) => from_scalar(name, value),
        Shape::Map(entries) => from_map(name, entries)?,
        Shape::RecordSeq(items) => from_records(name, items)?,
        Shape::NestedSeq(items) => from_nested(name, items)?,
        Shape::ScalarSeq(items) => from_scalars(name, items)?,
    };

    debug!(
        table = %table.name(),
        columns = table.column_count(),
        rows = table.row_count(),
        "materialized in-memory table"
    );
    Ok(table)
}

/// A bare scalar becomes a one-column, one-row table named `c1`.
fn from_scalar(name: String, value: Value) -> Table {
    let columns = vec![Column::new("c1", ColumnType::of(&value))];
    let rows = vec![Row::new(vec![value])];
    Table::new(name, columns, rows)
}

/// Map entries become a fixed two-column table: `c1` holds keys, `c2`
/// values. Types are sampled from one entry; entries of other kinds are
/// still carried through opaquely. Entry order carries no guarantee.
fn from_map(name: String, entries: Vec<(Value, Value)>) -> Result<Table, ShapeError> {
    let (key, value) = entries.first().ok_or(ShapeError::EmptyInput("map"))?;
    let columns = vec![
        Column::new("c1", ColumnType::of(key)),
        Column::new("c2", ColumnType::of(value)),
    ];
    let rows = entries
        .into_iter()
        .map(|(k, v)| Row::new(vec![k, v]))
        .collect();
    Ok(Table::new(name, columns, rows))
}

/// A sequence of records becomes one column per field of the first element,
/// in field order. Cells are stored as the string rendering of the field
/// values, via the single [`Value::render`] policy.
fn from_records(name: String, items: Vec<Value>) -> Result<Table, ShapeError> {
    let first = items.first().ok_or(ShapeError::EmptyInput("sequence"))?;
    let Value::Record(fields) = first else {
        return Err(ShapeError::MixedElements {
            row: 0,
            expected: "record",
            found: first.kind_name(),
        });
    };

    let columns: Vec<Column> = fields
        .iter()
        .map(|(field, value)| Column::new(field.clone(), ColumnType::of(value)))
        .collect();

    let mut rows = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let Value::Record(fields) = item else {
            return Err(ShapeError::MixedElements {
                row: i,
                expected: "record",
                found: item.kind_name(),
            });
        };
        // Cells are drawn in schema field order, not the element's own order.
        let mut cells = Vec::with_capacity(columns.len());
        for column in &columns {
            let value = fields.get(&column.name).ok_or_else(|| ShapeError::MissingField {
                row: i,
                field: column.name.clone(),
            })?;
            cells.push(Value::Str(value.render()));
        }
        rows.push(Row::new(cells));
    }
    Ok(Table::new(name, columns, rows))
}

/// A sequence of sequences becomes a table with synthesized column names
/// `c1..cN`, N taken from the first element. Every row is validated against
/// the schema width; a ragged row aborts construction.
fn from_nested(name: String, items: Vec<Value>) -> Result<Table, ShapeError> {
    let first = items.first().ok_or(ShapeError::EmptyInput("sequence"))?;
    let Value::Seq(head) = first else {
        return Err(ShapeError::MixedElements {
            row: 0,
            expected: "sequence",
            found: first.kind_name(),
        });
    };

    let columns: Vec<Column> = head
        .iter()
        .enumerate()
        .map(|(i, value)| Column::new(format!("c{}", i + 1), ColumnType::of(value)))
        .collect();
    let expected = columns.len();

    let mut rows = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        let Value::Seq(cells) = item else {
            return Err(ShapeError::MixedElements {
                row: i,
                expected: "sequence",
                found: item.kind_name(),
            });
        };
        if cells.len() != expected {
            return Err(ShapeError::RowLengthMismatch {
                row: i,
                expected,
                found: cells.len(),
            });
        }
        rows.push(Row::new(cells));
    }
    Ok(Table::new(name, columns, rows))
}

/// A sequence of anything else becomes a single-column table; elements are
/// carried verbatim as opaque single cells and never re-classified.
fn from_scalars(name: String, items: Vec<Value>) -> Result<Table, ShapeError> {
    let first = items.first().ok_or(ShapeError::EmptyInput("sequence"))?;
    let columns = vec![Column::new("c1", ColumnType::of(first))];
    let rows = items.into_iter().map(|v| Row::new(vec![v])).collect();
    Ok(Table::new(name, columns, rows))
}

impl RowSource for Table {
    fn names(&self) -> Result<Vec<String>, ShapeError> {
        Ok(self.columns().iter().map(|c| c.name.clone()).collect())
    }

    fn types(&self) -> Result<Vec<String>, ShapeError> {
        Ok(self.column_types().map(|t| t.to_string()).collect())
    }

    fn preload_all(&self) -> &[Row] {
        self.rows()
    }

    /// Everything was already delivered by `preload_all`; the cursor path is
    /// a no-op terminator so streaming and in-memory sources share one
    /// interface.
    fn read_next(&mut self) -> Result<Option<Row>, ShapeError> {
        Ok(None)
    }
}
