//! Employee-record walkthrough.
//!
//! Four fields, each guarded by a kind check followed by a content check,
//! validated over three sample records: one clean, one failing every field,
//! one with a mistyped age.

use recheck_model::Record;
use recheck_validate::{ValidationEngine, checks};

pub const NAME_MESSAGE: &str = "Name must be a non-empty string";
pub const AGE_MESSAGE: &str = "Age must be an integer between 0 and 150";
pub const EMAIL_MESSAGE: &str = "Email must be a valid email address";
pub const SALARY_MESSAGE: &str = "Salary must be a non-negative number";

/// One validated sample record.
#[derive(Debug, Clone)]
pub struct DemoCase {
    pub record: Record,
    pub valid: bool,
    pub errors: Vec<String>,
}

pub fn engine() -> ValidationEngine {
    let mut engine = ValidationEngine::new();
    engine.add_rule("name", checks::is_string(), NAME_MESSAGE);
    engine.add_rule("name", checks::non_empty_string(), NAME_MESSAGE);
    engine.add_rule("age", checks::is_integer(), AGE_MESSAGE);
    engine.add_rule("age", checks::int_between(0, 150), AGE_MESSAGE);
    engine.add_rule("email", checks::is_string(), EMAIL_MESSAGE);
    engine.add_rule("email", checks::email(), EMAIL_MESSAGE);
    engine.add_rule("salary", checks::is_number(), SALARY_MESSAGE);
    engine.add_rule("salary", checks::at_least(0.0), SALARY_MESSAGE);
    engine
}

pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new()
            .with("name", "Alice Johnson")
            .with("age", 25)
            .with("email", "alice@example.com")
            .with("salary", 75000),
        Record::new()
            .with("name", "")
            .with("age", 200)
            .with("email", "invalid-email")
            .with("salary", -5000),
        Record::new()
            .with("name", "Bob Smith")
            .with("age", "thirty")
            .with("email", "bob@company.com")
            .with("salary", 65000),
    ]
}

pub fn run() -> Vec<DemoCase> {
    let mut engine = engine();
    sample_records()
        .into_iter()
        .map(|record| {
            let valid = engine.validate(&record);
            DemoCase {
                errors: engine.errors(),
                record,
                valid,
            }
        })
        .collect()
}
