//! Column metadata and type information

use serde::{Deserialize, Serialize};

use super::value::Value;

/// Column type tag exposed to the query engine.
///
/// Only integer-ness is special-cased: the engine sorts and compares numeric
/// columns differently. Every other kind collapses into [`ColumnType::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Default,
}

impl Default for ColumnType {
    fn default() -> Self {
        ColumnType::Default
    }
}

impl ColumnType {
    /// Classify a value's kind. Only signed integers map to `Integer`.
    pub fn of(value: &Value) -> ColumnType {
        match value {
            Value::Int(_) => ColumnType::Integer,
            _ => ColumnType::Default,
        }
    }

    /// The SQL-facing type string for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Integer => "int",
            ColumnType::Default => "text",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Column metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Type tag inferred from the sampled value
    pub ty: ColumnType,
}

impl Column {
    /// Create a new column
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(ColumnType::of(&Value::Int(1)), ColumnType::Integer);
        assert_eq!(ColumnType::of(&Value::from(-3i8)), ColumnType::Integer);
        // Unsigned widths do not classify as integer columns
        assert_eq!(ColumnType::of(&Value::Uint(1)), ColumnType::Default);
        assert_eq!(ColumnType::of(&Value::Float(1.0)), ColumnType::Default);
        assert_eq!(ColumnType::of(&Value::from("1")), ColumnType::Default);
        assert_eq!(ColumnType::of(&Value::Bool(true)), ColumnType::Default);
        assert_eq!(ColumnType::of(&Value::Null), ColumnType::Default);
        assert_eq!(ColumnType::of(&Value::Seq(vec![])), ColumnType::Default);
    }

    #[test]
    fn test_sql_strings() {
        assert_eq!(ColumnType::Integer.as_str(), "int");
        assert_eq!(ColumnType::Default.as_str(), "text");
    }
}
