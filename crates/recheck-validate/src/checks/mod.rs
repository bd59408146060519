//! Built-in predicates.
//!
//! Each constructor returns a [`Predicate`] ready to register. [`Check`]
//! names the same predicates with their parameters so rule files can refer
//! to them.

mod numeric;
mod text;
mod types;

pub use numeric::{at_least, at_most, int_between};
pub use text::{contains_all, email, matches_pattern, max_length, min_length, non_empty_string};
pub use types::{is_boolean, is_integer, is_number, is_string, not_null};

use recheck_model::Value;
use serde::Deserialize;

use crate::error::CheckError;
use crate::rule::Predicate;

/// A value equal to one of `allowed`.
pub fn one_of(allowed: Vec<Value>) -> Predicate {
    Box::new(move |value: &Value| Ok(allowed.contains(value)))
}

/// A built-in check and its parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Check {
    Integer,
    Number,
    String,
    Boolean,
    NotNull,
    NonEmptyString,
    Email,
    ContainsAll { values: Vec<String> },
    Pattern { pattern: String },
    MinLength { min: usize },
    MaxLength { max: usize },
    IntBetween { min: i64, max: i64 },
    AtLeast { min: f64 },
    AtMost { max: f64 },
    OneOf { values: Vec<Value> },
}

/// Check names with their parameters, for listing.
pub const CATALOG: &[(&str, &str, &str)] = &[
    ("integer", "", "value is an integer"),
    ("number", "", "value is an integer or float"),
    ("string", "", "value is a string"),
    ("boolean", "", "value is a boolean"),
    ("not_null", "", "value is not null"),
    ("non_empty_string", "", "string with non-whitespace content"),
    ("email", "", "string containing '@' and '.'"),
    ("contains_all", "values", "string containing every value"),
    ("pattern", "pattern", "string matching a regular expression"),
    ("min_length", "min", "string, list or map with at least min items"),
    ("max_length", "max", "string, list or map with at most max items"),
    ("int_between", "min, max", "integer within min..=max"),
    ("at_least", "min", "number >= min"),
    ("at_most", "max", "number <= max"),
    ("one_of", "values", "value equal to one of values"),
];

impl Check {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::NotNull => "not_null",
            Self::NonEmptyString => "non_empty_string",
            Self::Email => "email",
            Self::ContainsAll { .. } => "contains_all",
            Self::Pattern { .. } => "pattern",
            Self::MinLength { .. } => "min_length",
            Self::MaxLength { .. } => "max_length",
            Self::IntBetween { .. } => "int_between",
            Self::AtLeast { .. } => "at_least",
            Self::AtMost { .. } => "at_most",
            Self::OneOf { .. } => "one_of",
        }
    }

    /// Build the predicate, rejecting unusable parameters.
    pub fn predicate(&self) -> Result<Predicate, CheckError> {
        let predicate = match self {
            Self::Integer => is_integer(),
            Self::Number => is_number(),
            Self::String => is_string(),
            Self::Boolean => is_boolean(),
            Self::NotNull => not_null(),
            Self::NonEmptyString => non_empty_string(),
            Self::Email => email(),
            Self::ContainsAll { values } => contains_all(values.as_slice()),
            Self::Pattern { pattern } => matches_pattern(pattern)?,
            Self::MinLength { min } => min_length(*min),
            Self::MaxLength { max } => max_length(*max),
            Self::IntBetween { min, max } => {
                if min > max {
                    return Err(empty_range(min, max));
                }
                int_between(*min, *max)
            }
            Self::AtLeast { min } => at_least(*min),
            Self::AtMost { max } => at_most(*max),
            Self::OneOf { values } => one_of(values.clone()),
        };
        Ok(predicate)
    }
}

fn empty_range(min: &impl ToString, max: &impl ToString) -> CheckError {
    CheckError::EmptyRange {
        min: min.to_string(),
        max: max.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_check() {
        let checks = [
            Check::Integer,
            Check::Number,
            Check::String,
            Check::Boolean,
            Check::NotNull,
            Check::NonEmptyString,
            Check::Email,
            Check::ContainsAll { values: vec![] },
            Check::Pattern {
                pattern: String::new(),
            },
            Check::MinLength { min: 0 },
            Check::MaxLength { max: 0 },
            Check::IntBetween { min: 0, max: 0 },
            Check::AtLeast { min: 0.0 },
            Check::AtMost { max: 0.0 },
            Check::OneOf { values: vec![] },
        ];
        let names: Vec<&str> = checks.iter().map(Check::name).collect();
        let catalog: Vec<&str> = CATALOG.iter().map(|(name, _, _)| *name).collect();
        assert_eq!(names, catalog);
    }

    #[test]
    fn one_of_compares_values() {
        let check = one_of(vec![Value::from("M"), Value::from("F")]);
        assert_eq!(check(&Value::from("F")), Ok(true));
        assert_eq!(check(&Value::from("X")), Ok(false));
    }

    #[test]
    fn reversed_range_is_rejected() {
        let Err(err) = (Check::IntBetween { min: 10, max: 1 }).predicate() else {
            panic!("range should be rejected");
        };
        assert_eq!(
            err.to_string(),
            "empty range: min 10 is greater than max 1"
        );
    }
}
