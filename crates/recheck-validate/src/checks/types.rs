//! Kind checks.

use recheck_model::Value;

use crate::rule::Predicate;

pub fn is_integer() -> Predicate {
    Box::new(|value: &Value| Ok(value.is_int()))
}

/// Integers and floats.
pub fn is_number() -> Predicate {
    Box::new(|value: &Value| Ok(value.is_number()))
}

pub fn is_string() -> Predicate {
    Box::new(|value: &Value| Ok(value.is_str()))
}

pub fn is_boolean() -> Predicate {
    Box::new(|value: &Value| Ok(value.as_bool().is_ok()))
}

/// Fails on `null`. Use this to make a field that is present in the record
/// mandatory to fill in.
pub fn not_null() -> Predicate {
    Box::new(|value: &Value| Ok(!value.is_null()))
}
