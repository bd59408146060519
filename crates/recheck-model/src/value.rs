//! Dynamic field values.
//!
//! Records carry values of mixed kinds, so fields are modelled as a tagged
//! union. Typed accessors return [`ValueError`] instead of panicking, which
//! lets rule predicates surface type problems with `?`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A single field value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    List,
    Map,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Int(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::String,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// True for integers and floats. Booleans are not numbers.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    pub fn as_int(&self) -> Result<i64, ValueError> {
        match self {
            Self::Int(value) => Ok(*value),
            other => Err(other.mismatch("integer")),
        }
    }

    /// Integer or float, widened to `f64`.
    pub fn as_number(&self) -> Result<f64, ValueError> {
        match self {
            Self::Int(value) => Ok(*value as f64),
            Self::Float(value) => Ok(*value),
            other => Err(other.mismatch("number")),
        }
    }

    pub fn as_str(&self) -> Result<&str, ValueError> {
        match self {
            Self::Str(value) => Ok(value),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            Self::Bool(value) => Ok(*value),
            other => Err(other.mismatch("boolean")),
        }
    }

    /// Length of a string (in chars), list or map.
    pub fn len(&self) -> Result<usize, ValueError> {
        match self {
            Self::Str(value) => Ok(value.chars().count()),
            Self::List(items) => Ok(items.len()),
            Self::Map(entries) => Ok(entries.len()),
            other => Err(other.mismatch("string, list or map")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> ValueError {
        ValueError::TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Str(value) => write!(f, "{value:?}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (idx, (key, item)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(int) => Self::Int(int),
                None => Self::Float(number.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(text) => Self::Str(text),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, item)| (key, Self::from(item)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn typed_accessors_report_mismatch() {
        let value = Value::from("twenty");
        let err = value.as_int().unwrap_err();
        assert_eq!(err.to_string(), "expected integer, got string");

        let err = Value::Null.as_number().unwrap_err();
        assert_eq!(err.to_string(), "expected number, got null");
    }

    #[test]
    fn as_number_widens_integers() {
        assert_eq!(Value::from(25).as_number(), Ok(25.0));
        assert_eq!(Value::from(2.5).as_number(), Ok(2.5));
        assert!(Value::from(true).as_number().is_err());
    }

    #[test]
    fn len_counts_chars_items_and_entries() {
        assert_eq!(Value::from("héllo").len(), Ok(5));
        assert_eq!(Value::from(vec![Value::Null, Value::from(1)]).len(), Ok(2));
        assert!(Value::from(3).len().is_err());
    }

    #[test]
    fn json_numbers_keep_integers() {
        let value = Value::from(json!({"age": 25, "salary": 65000.5, "tags": ["a"]}));
        let Value::Map(entries) = value else {
            panic!("expected map");
        };
        assert_eq!(entries["age"], Value::Int(25));
        assert_eq!(entries["salary"], Value::Float(65000.5));
        assert_eq!(entries["tags"].kind(), ValueKind::List);
    }

    #[test]
    fn display_quotes_strings() {
        let value = Value::from(vec![Value::from("a"), Value::from(1), Value::Null]);
        assert_eq!(value.to_string(), r#"["a", 1, null]"#);
    }

    #[test]
    fn deserializes_from_plain_json() {
        let value: Value = serde_json::from_str(r#"[1, 1.5, "x", true, null]"#).unwrap();
        assert_eq!(
            value,
            Value::List(vec![
                Value::Int(1),
                Value::Float(1.5),
                Value::from("x"),
                Value::Bool(true),
                Value::Null,
            ])
        );
    }
}
