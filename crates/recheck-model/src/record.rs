//! Records: the unit of data a rule registry is checked against.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::value::Value;

/// Field name to value mapping supplied per validation call.
///
/// Iteration is in field-name order so reports are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Insert a field, returning the previous value if present.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.fields.iter()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (field, value)) in self.fields.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field:?}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(field, value)| (field.into(), value.into()))
                .collect(),
        }
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = ModelError;

    fn try_from(value: serde_json::Value) -> crate::Result<Self> {
        match Value::from(value) {
            Value::Map(fields) => Ok(Self { fields }),
            other => Err(ModelError::NotAnObject {
                actual: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;
    use serde_json::json;

    #[test]
    fn builder_and_lookup() {
        let record = Record::new().with("name", "Bob").with("age", 30);
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("age"), Some(&Value::Int(30)));
        assert_eq!(record.get("email"), None);
    }

    #[test]
    fn iterates_in_field_name_order() {
        let record: Record = [("salary", Value::from(1)), ("age", Value::from(2))]
            .into_iter()
            .collect();
        let names: Vec<&str> = record.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["age", "salary"]);
    }

    #[test]
    fn display_lists_fields() {
        let record = Record::new().with("name", "").with("age", 200);
        assert_eq!(record.to_string(), r#"{"age": 200, "name": ""}"#);
    }

    #[test]
    fn rejects_non_object_json() {
        let err = Record::try_from(json!([1, 2])).unwrap_err();
        assert!(matches!(
            err,
            ModelError::NotAnObject {
                actual: ValueKind::List
            }
        ));
    }
}
