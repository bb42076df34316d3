//! Shape classification for input values
//!
//! The builder decides once, at the boundary, which construction strategy a
//! value gets. Sequences are dispatched on the kind of their first element
//! only; later elements are checked (or deliberately not checked, for scalar
//! slices) by the strategy itself.

use crate::error::ShapeError;
use crate::model::Value;

/// The structural category of an input value, decided once per build.
#[derive(Debug)]
pub(crate) enum Shape {
    /// A bare scalar becomes a single-column, single-row table.
    Scalar(Value),
    /// Key/value entries become a two-column table.
    Map(Vec<(Value, Value)>),
    /// A sequence of records, one column per field of the first element.
    RecordSeq(Vec<Value>),
    /// A sequence of sequences, one row per outer element.
    NestedSeq(Vec<Value>),
    /// A sequence of anything else, carried as opaque single-cell rows.
    ScalarSeq(Vec<Value>),
}

impl Shape {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Shape::Scalar(_) => "scalar",
            Shape::Map(_) => "map",
            Shape::RecordSeq(_) => "record-slice",
            Shape::NestedSeq(_) => "nested-slice",
            Shape::ScalarSeq(_) => "scalar-slice",
        }
    }
}

/// Classify a value into its construction shape.
///
/// Empty containers are rejected here: every strategy derives its schema
/// from the first element, which does not exist yet.
pub(crate) fn classify(value: Value) -> Result<Shape, ShapeError> {
    match value {
        Value::Map(entries) => {
            if entries.is_empty() {
                return Err(ShapeError::EmptyInput("map"));
            }
            Ok(Shape::Map(entries))
        }
        Value::Seq(items) => match items.first() {
            None => Err(ShapeError::EmptyInput("sequence")),
            Some(Value::Record(_)) => Ok(Shape::RecordSeq(items)),
            Some(Value::Seq(_)) => Ok(Shape::NestedSeq(items)),
            Some(_) => Ok(Shape::ScalarSeq(items)),
        },
        // A bare record is not one of the supported table shapes; treating
        // it as a scalar would produce a meaningless single-cell table.
        Value::Record(_) => Err(ShapeError::UnsupportedShape("record")),
        scalar => Ok(Shape::Scalar(scalar)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        assert!(matches!(
            classify(Value::Int(1)),
            Ok(Shape::Scalar(Value::Int(1)))
        ));
        assert!(matches!(
            classify(Value::map([("a", 1i64)])),
            Ok(Shape::Map(_))
        ));
        assert!(matches!(
            classify(Value::from(vec![vec![1i64], vec![2]])),
            Ok(Shape::NestedSeq(_))
        ));
        assert!(matches!(
            classify(Value::from(vec![1i64, 2])),
            Ok(Shape::ScalarSeq(_))
        ));
        assert!(matches!(
            classify(Value::Seq(vec![Value::record([("id", 1i64)])])),
            Ok(Shape::RecordSeq(_))
        ));
    }

    #[test]
    fn test_scalar_slice_not_reclassified() {
        // A map as the first element is not a record or sequence, so the
        // whole slice is treated as opaque single values.
        let shape = classify(Value::Seq(vec![Value::map([("k", 1i64)])])).unwrap();
        assert!(matches!(shape, Shape::ScalarSeq(_)));
    }

    #[test]
    fn test_empty_containers_rejected() {
        assert_eq!(
            classify(Value::Seq(vec![])).unwrap_err(),
            ShapeError::EmptyInput("sequence")
        );
        assert_eq!(
            classify(Value::Map(vec![])).unwrap_err(),
            ShapeError::EmptyInput("map")
        );
    }

    #[test]
    fn test_bare_record_rejected() {
        assert_eq!(
            classify(Value::record([("id", 1i64)])).unwrap_err(),
            ShapeError::UnsupportedShape("record")
        );
    }
}
