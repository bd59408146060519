//! Engine behavior on the walkthrough scenarios.

use recheck_model::{Record, Value};
use recheck_validate::{
    FailureKind, RuleFault, RuleRegistry, ValidationEngine, checks,
};

const AGE_MESSAGE: &str = "Age must be an integer between 0 and 150";

fn age_engine() -> ValidationEngine {
    let mut engine = ValidationEngine::new();
    engine.add_rule("age", checks::is_integer(), AGE_MESSAGE);
    engine.add_rule("age", checks::int_between(0, 150), AGE_MESSAGE);
    engine
}

#[test]
fn age_in_range_passes() {
    let mut engine = age_engine();
    assert!(engine.validate(&Record::new().with("age", 25)));
    assert!(engine.errors().is_empty());
}

#[test]
fn age_out_of_range_fails_with_rule_message() {
    let mut engine = age_engine();
    assert!(!engine.validate(&Record::new().with("age", 200)));
    assert_eq!(
        engine.errors(),
        vec!["age: Age must be an integer between 0 and 150"]
    );
}

#[test]
fn age_as_text_fails_type_rule_first() {
    let mut engine = age_engine();
    assert!(!engine.validate(&Record::new().with("age", "twenty")));
    assert_eq!(
        engine.errors(),
        vec!["age: Age must be an integer between 0 and 150"]
    );
}

#[test]
fn email_rule_ignores_fields_without_rules() {
    let mut engine = ValidationEngine::new();
    engine.add_rule("email", checks::email(), "Email must be a valid email address");

    let record = Record::new().with("name", "Bob").with("email", "bob@x.com");
    assert!(engine.validate(&record));
    assert!(engine.errors().is_empty());

    assert!(!engine.validate(&Record::new().with("email", "invalid-email")));
    assert_eq!(
        engine.errors(),
        vec!["email: Email must be a valid email address"]
    );
}

#[test]
fn one_message_per_failing_field() {
    let mut engine = ValidationEngine::new();
    engine.add_rule("name", checks::is_string(), "Name must be a string");
    engine.add_rule("name", checks::non_empty_string(), "Name must be non-empty");
    engine.add_rule("salary", checks::is_number(), "Salary must be a number");
    engine.add_rule("salary", checks::at_least(0.0), "Salary must be non-negative");

    let record = Record::new().with("name", 42).with("salary", "lots");
    assert!(!engine.validate(&record));
    assert_eq!(
        engine.errors(),
        vec!["name: Name must be a string", "salary: Salary must be a number"]
    );
}

#[test]
fn short_circuit_keeps_first_message_only() {
    let mut engine = ValidationEngine::new();
    engine.add_rule("code", |_| Ok(false), "first");
    engine.add_rule("code", |_| Ok(false), "second");

    assert!(!engine.validate_field("code", &Value::from("x")));
    assert_eq!(engine.errors(), vec!["code: first"]);
}

#[test]
fn returned_fault_is_recorded_once() {
    let mut engine = ValidationEngine::new();
    engine.add_rule(
        "salary",
        |v| Ok(v.as_number()? >= 0.0),
        "Salary must be non-negative",
    );
    engine.add_rule("salary", |_| Ok(false), "unreachable");

    assert!(!engine.validate(&Record::new().with("salary", "lots")));
    assert_eq!(engine.errors(), vec!["salary: expected number, got string"]);
}

#[test]
fn custom_fault_message_is_recorded() {
    let mut engine = ValidationEngine::new();
    engine.add_rule(
        "ratio",
        |_| Err(RuleFault::message("division by zero")),
        "Ratio must be valid",
    );

    assert!(!engine.validate_field("ratio", &Value::from(0)));
    assert_eq!(engine.errors(), vec!["ratio: division by zero"]);
}

#[test]
fn panicking_predicate_does_not_escape() {
    let mut engine = ValidationEngine::new();
    engine.add_rule(
        "items",
        |v| {
            let Value::List(items) = v else {
                panic!("not a list");
            };
            Ok(!items.is_empty())
        },
        "Items must not be empty",
    );

    assert!(!engine.validate(&Record::new().with("items", 3)));
    assert_eq!(
        engine.errors(),
        vec!["items: predicate panicked: not a list"]
    );
}

#[test]
fn registered_but_absent_fields_are_not_required() {
    let mut engine = age_engine();
    engine.add_rule("email", checks::not_null(), "Email is required");

    assert!(engine.validate(&Record::new().with("name", "Alice")));
    assert!(engine.validate(&Record::new()));
    assert!(!engine.validate(&Record::new().with("email", Value::Null)));
    assert_eq!(engine.errors(), vec!["email: Email is required"]);
}

#[test]
fn errors_are_a_defensive_copy() {
    let mut engine = age_engine();
    engine.validate(&Record::new().with("age", 200));

    let mut copy = engine.errors();
    copy.clear();
    copy.push("tampered".to_string());

    assert_eq!(
        engine.errors(),
        vec!["age: Age must be an integer between 0 and 150"]
    );
}

#[test]
fn validate_is_idempotent() {
    let mut engine = age_engine();
    let record = Record::new().with("age", -5).with("name", "x");

    let first = (engine.validate(&record), engine.errors());
    let second = (engine.validate(&record), engine.errors());
    assert_eq!(first, second);
}

#[test]
fn registry_check_reports_kinds() {
    let mut registry = RuleRegistry::new();
    registry.add_rule("age", |v| Ok(v.as_int()? >= 0), "Age must be non-negative");
    registry.add_rule("name", |v| Ok(v.is_str()), "Name must be a string");

    let record = Record::new().with("age", "old").with("name", 1);
    let report = registry.check(&record);

    assert!(!report.valid);
    assert_eq!(report.fault_count(), 1);
    assert_eq!(report.violation_count(), 1);
    assert_eq!(report.failures[0].kind, FailureKind::Fault);
    assert_eq!(report.failures[1].kind, FailureKind::Violation);
}

#[test]
fn registry_checks_concurrently() {
    let mut registry = RuleRegistry::new();
    registry.add_rule("age", checks::int_between(0, 150), AGE_MESSAGE);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4i64)
            .map(|n| {
                let registry = &registry;
                scope.spawn(move || registry.check(&Record::new().with("age", n * 100)))
            })
            .collect();
        let valid: Vec<bool> = handles
            .into_iter()
            .map(|h| h.join().unwrap().valid)
            .collect();
        assert_eq!(valid, vec![true, true, false, false]);
    });
}

#[test]
fn report_serializes_for_consumers() {
    let engine = age_engine();
    let report = engine
        .registry()
        .check(&Record::new().with("age", 200));

    insta::assert_json_snapshot!(report, @r#"
    {
      "valid": false,
      "failures": [
        {
          "field": "age",
          "kind": "violation",
          "message": "Age must be an integer between 0 and 150"
        }
      ]
    }
    "#);
}
