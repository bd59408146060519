//! Rules, per-field rule sets and the registry that holds them.
//!
//! The registry is immutable once built and evaluates records through
//! `&self`, returning its own [`ValidationReport`]. It can therefore be
//! shared across threads without locking.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use recheck_model::{Record, Value};
use tracing::{debug, trace, warn};

use crate::error::RuleFault;
use crate::report::{FieldFailure, ValidationReport};

/// Outcome of a single predicate call.
pub type PredicateResult = Result<bool, RuleFault>;

/// A pure function deciding whether a value satisfies a rule.
pub type Predicate = Box<dyn Fn(&Value) -> PredicateResult + Send + Sync>;

/// A predicate paired with the message recorded when it returns `false`.
pub struct Rule {
    predicate: Predicate,
    message: String,
}

impl Rule {
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> PredicateResult + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Run the predicate. Panics are caught and reported as faults.
    pub fn evaluate(&self, value: &Value) -> PredicateResult {
        match panic::catch_unwind(AssertUnwindSafe(|| (self.predicate)(value))) {
            Ok(outcome) => outcome,
            Err(payload) => Err(RuleFault::Panicked(panic_message(payload.as_ref()))),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "predicate panicked".to_string()
    }
}

/// Rules for one field, evaluated in insertion order.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// The first failing rule for `value`, if any. Later rules are skipped.
    pub fn first_failure(&self, field: &str, value: &Value) -> Option<FieldFailure> {
        for rule in &self.rules {
            match rule.evaluate(value) {
                Ok(true) => {}
                Ok(false) => {
                    debug!(field, rule = rule.message(), "rule violated");
                    return Some(FieldFailure::violation(field, rule.message()));
                }
                Err(fault) => {
                    warn!(field, error = %fault, "rule fault");
                    return Some(FieldFailure::fault(field, &fault));
                }
            }
        }
        None
    }
}

/// Field name to [`RuleSet`] mapping.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    sets: BTreeMap<String, RuleSet>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to `field`, creating its rule set if absent.
    ///
    /// `field` must be non-empty; this is the caller's responsibility.
    pub fn add_rule<F>(&mut self, field: impl Into<String>, predicate: F, message: impl Into<String>)
    where
        F: Fn(&Value) -> PredicateResult + Send + Sync + 'static,
    {
        self.insert(field, Rule::new(predicate, message));
    }

    pub fn insert(&mut self, field: impl Into<String>, rule: Rule) {
        let field = field.into();
        debug_assert!(!field.is_empty(), "rule registered with empty field name");
        if field.is_empty() {
            warn!("rule registered with empty field name");
        }
        trace!(field = %field, rule = rule.message(), "registered rule");
        self.sets.entry(field).or_default().push(rule);
    }

    pub fn get(&self, field: &str) -> Option<&RuleSet> {
        self.sets.get(field)
    }

    /// Fields that have at least one rule, in name order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// Number of fields with rules.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Total number of rules across all fields.
    pub fn rule_count(&self) -> usize {
        self.sets.values().map(RuleSet::len).sum()
    }

    /// Check one field. Fields without rules always pass.
    pub fn check_field(&self, field: &str, value: &Value) -> Option<FieldFailure> {
        self.sets.get(field)?.first_failure(field, value)
    }

    /// Check every field present in `record`.
    ///
    /// Every field is evaluated even after a failure. Fields with rules but
    /// absent from the record are not checked.
    pub fn check(&self, record: &Record) -> ValidationReport {
        let mut report = ValidationReport::new();
        for (field, value) in record {
            if let Some(failure) = self.check_field(field, value) {
                report.add(failure);
            }
        }
        debug!(
            fields = record.len(),
            failures = report.failures.len(),
            valid = report.valid,
            "checked record"
        );
        report
    }
}
