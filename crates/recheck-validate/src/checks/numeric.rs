//! Numeric checks.

use recheck_model::Value;

use crate::rule::{Predicate, PredicateResult};

/// An integer in `min..=max`. Non-integers fail rather than fault.
pub fn int_between(min: i64, max: i64) -> Predicate {
    Box::new(move |value: &Value| Ok(matches!(value, Value::Int(n) if (min..=max).contains(n))))
}

/// A number `>= min`. Non-numbers fault.
pub fn at_least(min: f64) -> Predicate {
    Box::new(move |value: &Value| -> PredicateResult { Ok(value.as_number()? >= min) })
}

/// A number `<= max`. Non-numbers fault.
pub fn at_most(max: f64) -> Predicate {
    Box::new(move |value: &Value| -> PredicateResult { Ok(value.as_number()? <= max) })
}
