//! Stateful validation engine.
//!
//! [`ValidationEngine`] pairs a [`RuleRegistry`] with the error log of the
//! most recent [`validate`](ValidationEngine::validate) call. For concurrent
//! use, share the registry and call [`RuleRegistry::check`] instead.

use recheck_model::{Record, Value};

use crate::rule::{PredicateResult, RuleRegistry};

#[derive(Debug, Default)]
pub struct ValidationEngine {
    registry: RuleRegistry,
    errors: Vec<String>,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            errors: Vec::new(),
        }
    }

    /// Register a rule for `field_name`. Rules run in registration order.
    pub fn add_rule<F>(
        &mut self,
        field_name: impl Into<String>,
        predicate: F,
        message: impl Into<String>,
    ) where
        F: Fn(&Value) -> PredicateResult + Send + Sync + 'static,
    {
        self.registry.add_rule(field_name, predicate, message);
    }

    /// Validate one field, appending at most one message to the error log.
    ///
    /// Evaluation stops at the first rule that fails or faults.
    pub fn validate_field(&mut self, field_name: &str, value: &Value) -> bool {
        match self.registry.check_field(field_name, value) {
            Some(failure) => {
                self.errors.push(failure.to_string());
                false
            }
            None => true,
        }
    }

    /// Validate every field of `record`, replacing the error log.
    pub fn validate(&mut self, record: &Record) -> bool {
        let report = self.registry.check(record);
        self.errors = report.messages();
        report.valid
    }

    /// Copy of the error log from the most recent validation.
    pub fn errors(&self) -> Vec<String> {
        self.errors.clone()
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }
}
