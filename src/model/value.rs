//! Input value model
//!
//! [`Value`] is the closed set of runtime shapes the table builder accepts:
//! scalars, sequences, maps, and records. Callers assemble it directly via
//! the `From` conversions, or convert parsed JSON with
//! `Value::from(serde_json::Value)`.

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Named fields of a record, in declaration order.
pub type Fields = IndexMap<String, Value, FxBuildHasher>;

/// An arbitrary in-memory value that can be adapted into a table.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    /// Ordered sequence of values.
    Seq(Vec<Value>),
    /// Map entries as key/value pairs. Entry order carries no meaning.
    Map(Vec<(Value, Value)>),
    /// Named-field aggregate with a fixed field order.
    Record(Fields),
}

impl Value {
    /// Build a record value from `(field name, value)` pairs.
    pub fn record<K, V, I>(fields: I) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a map value from key/value pairs.
    pub fn map<K, V, I>(entries: I) -> Value
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Kind label used in shape dispatch and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Uint(_) => "unsigned integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Seq(_) => "sequence",
            Value::Map(_) => "map",
            Value::Record(_) => "record",
        }
    }

    /// Single stringification policy for table cells.
    ///
    /// The record-slice strategy stores cells as text; this is the one place
    /// that rendering is defined.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => {
                // Handle NaN comparison
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            // Cross-width integer comparison
            (Value::Int(a), Value::Uint(b)) | (Value::Uint(b), Value::Int(a)) => {
                *a >= 0 && *a as u64 == *b
            }
            // Cross-type numeric comparison
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            (Value::Uint(a), Value::Float(b)) | (Value::Float(b), Value::Uint(a)) => {
                (*a as f64) == *b
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::Date(d) => write!(f, "{}", d),
            Value::DateTime(dt) => write!(f, "{}", dt),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Record(fields) => {
                write!(f, "{{")?;
                for (i, (name, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

macro_rules! value_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Value::Int(i as i64)
            }
        })*
    };
}

macro_rules! value_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(u: $t) -> Self {
                Value::Uint(u as u64)
            }
        })*
    };
}

value_from_signed!(i8, i16, i32, i64, isize);
value_from_unsigned!(u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x as f64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(items: Vec<T>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    /// Convert parsed JSON, preferring integers over floats and probing
    /// strings for date/datetime forms.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else if let Some(x) = n.as_f64() {
                    Value::Float(x)
                } else {
                    Value::Str(n.to_string())
                }
            }
            serde_json::Value::String(s) => parse_temporal(s),
            serde_json::Value::Array(items) => {
                Value::Seq(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Record(
                obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

/// Probe a string for date/datetime forms before falling back to text.
fn parse_temporal(s: String) -> Value {
    if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        return Value::Date(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S") {
        return Value::DateTime(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S") {
        return Value::DateTime(dt);
    }
    Value::Str(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(42i32), Value::Int(42));
        assert_eq!(Value::from(42u8), Value::Uint(42));
        assert_eq!(Value::from("hello"), Value::Str("hello".to_string()));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(
            Value::from(vec![1i64, 2]),
            Value::Seq(vec![Value::Int(1), Value::Int(2)])
        );
    }

    #[test]
    fn test_nan_equality() {
        assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
        assert_eq!(Value::Int(3), Value::Float(3.0));
        assert_eq!(Value::Int(3), Value::Uint(3));
        assert_ne!(Value::Int(-1), Value::Uint(u64::MAX));
    }

    #[test]
    fn test_render() {
        assert_eq!(Value::Int(42).render(), "42");
        assert_eq!(Value::from("test").render(), "test");
        assert_eq!(Value::Bool(false).render(), "false");
        assert_eq!(Value::Null.render(), "NULL");
        assert_eq!(Value::from(vec![1i64, 2]).render(), "[1, 2]");
        assert_eq!(
            Value::record([("id", Value::Int(1)), ("name", Value::from("a"))]).render(),
            "{id: 1, name: a}"
        );
    }

    #[test]
    fn test_from_json() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"id": 1, "score": 1.5, "tags": ["x"], "when": "2024-01-15"}"#)
                .unwrap();
        let value = Value::from(json);
        let Value::Record(fields) = &value else {
            panic!("expected a record, got {:?}", value);
        };
        assert_eq!(fields["id"], Value::Int(1));
        assert_eq!(fields["score"], Value::Float(1.5));
        assert_eq!(fields["tags"], Value::Seq(vec![Value::Str("x".into())]));
        assert_eq!(
            fields["when"],
            Value::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_json_large_unsigned() {
        let json = serde_json::json!(u64::MAX);
        assert_eq!(Value::from(json), Value::Uint(u64::MAX));
    }
}
