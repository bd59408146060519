//! String checks.
//!
//! `non_empty_string`, `contains_all` and `email` fail on non-strings.
//! `matches_pattern` and the length checks fault instead, since the
//! question they ask has no answer for the wrong kind.

use recheck_model::Value;
use regex::Regex;

use crate::error::CheckError;
use crate::rule::{Predicate, PredicateResult};

/// A string with at least one non-whitespace character.
pub fn non_empty_string() -> Predicate {
    Box::new(|value: &Value| Ok(matches!(value, Value::Str(text) if !text.trim().is_empty())))
}

/// A string containing every needle.
pub fn contains_all<S: AsRef<str>>(needles: &[S]) -> Predicate {
    let needles: Vec<String> = needles.iter().map(|n| n.as_ref().to_string()).collect();
    Box::new(move |value: &Value| {
        Ok(matches!(value, Value::Str(text) if needles.iter().all(|n| text.contains(n.as_str()))))
    })
}

/// Loose email shape: contains `@` and `.`.
pub fn email() -> Predicate {
    contains_all(&["@", "."])
}

pub fn matches_pattern(pattern: &str) -> Result<Predicate, CheckError> {
    let regex = Regex::new(pattern).map_err(|source| CheckError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(Box::new(move |value: &Value| -> PredicateResult {
        Ok(regex.is_match(value.as_str()?))
    }))
}

pub fn min_length(min: usize) -> Predicate {
    Box::new(move |value: &Value| -> PredicateResult { Ok(value.len()? >= min) })
}

pub fn max_length(max: usize) -> Predicate {
    Box::new(move |value: &Value| -> PredicateResult { Ok(value.len()? <= max) })
}
