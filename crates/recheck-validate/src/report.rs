//! Validation outcomes.

use std::fmt;

use serde::Serialize;

/// Why a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The predicate returned `false`.
    Violation,
    /// The predicate returned an error or panicked.
    Fault,
}

/// The single failure recorded for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    pub field: String,
    pub kind: FailureKind,
    pub message: String,
}

impl FieldFailure {
    pub fn violation(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            kind: FailureKind::Violation,
            message: message.to_string(),
        }
    }

    pub fn fault(field: &str, description: impl fmt::Display) -> Self {
        Self {
            field: field.to_string(),
            kind: FailureKind::Fault,
            message: description.to_string(),
        }
    }
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of checking one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub failures: Vec<FieldFailure>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self {
            valid: true,
            failures: Vec::new(),
        }
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, failure: FieldFailure) {
        self.valid = false;
        self.failures.push(failure);
    }

    /// Failures rendered as `"<field>: <message>"`.
    pub fn messages(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }

    pub fn violation_count(&self) -> usize {
        self.count(FailureKind::Violation)
    }

    pub fn fault_count(&self) -> usize {
        self.count(FailureKind::Fault)
    }

    fn count(&self, kind: FailureKind) -> usize {
        self.failures.iter().filter(|f| f.kind == kind).count()
    }
}
