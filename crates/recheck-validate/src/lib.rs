//! Rule-based record validation.
//!
//! Rules pair a predicate with a message and are registered per field.
//! Within a field, rules run in registration order and the first failure
//! wins. Across a record, every field is checked and all failures are kept.
//!
//! ```
//! use recheck_model::Record;
//! use recheck_validate::{ValidationEngine, checks};
//!
//! let mut engine = ValidationEngine::new();
//! engine.add_rule("age", checks::is_integer(), "Age must be an integer between 0 and 150");
//! engine.add_rule("age", checks::int_between(0, 150), "Age must be an integer between 0 and 150");
//!
//! assert!(!engine.validate(&Record::new().with("age", 200)));
//! assert_eq!(engine.errors(), vec!["age: Age must be an integer between 0 and 150"]);
//! ```

pub mod checks;
mod engine;
mod error;
pub mod loader;
mod report;
mod rule;

pub use checks::Check;
pub use engine::ValidationEngine;
pub use error::{CheckError, LoadError, RuleFault};
pub use loader::{load_rules, parse_rules};
pub use report::{FailureKind, FieldFailure, ValidationReport};
pub use rule::{Predicate, PredicateResult, Rule, RuleRegistry, RuleSet};
