//! End-to-end: rule file text and record JSON to serialized outcomes.

use recheck_cli::demo;
use recheck_cli::records::{check_records, parse_records};
use recheck_validate::parse_rules;

const RULES: &str = r#"
schema = "recheck.rules"
schema_version = 1

[[rule]]
field = "name"
check = "non_empty_string"
message = "Name must be a non-empty string"

[[rule]]
field = "salary"
check = "at_least"
min = 0
message = "Salary must be a non-negative number"
"#;

#[test]
fn outcomes_serialize_with_index_and_failures() {
    let registry = parse_rules(RULES, "inline").unwrap();
    let records = parse_records(
        r#"[
            {"name": "Alice Johnson", "salary": 75000},
            {"name": "", "salary": "a lot"}
        ]"#,
    )
    .unwrap();

    let outcomes = check_records(&registry, &records);
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].report.valid);

    insta::assert_json_snapshot!(outcomes, @r#"
    [
      {
        "index": 1,
        "valid": true,
        "failures": []
      },
      {
        "index": 2,
        "valid": false,
        "failures": [
          {
            "field": "name",
            "kind": "violation",
            "message": "Name must be a non-empty string"
          },
          {
            "field": "salary",
            "kind": "fault",
            "message": "expected number, got string"
          }
        ]
      }
    ]
    "#);
}

#[test]
fn demo_registry_matches_demo_engine() {
    let engine = demo::engine();
    let outcomes = check_records(engine.registry(), &demo::sample_records());
    let valid: Vec<bool> = outcomes.iter().map(|o| o.report.valid).collect();
    assert_eq!(valid, vec![true, false, false]);
    assert_eq!(outcomes[1].report.violation_count(), 4);
    assert_eq!(outcomes[2].report.failures.len(), 1);
}

#[test]
fn bundled_demo_files_reproduce_walkthrough() {
    let demos = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos");
    let registry = recheck_validate::load_rules(&demos.join("employees.rules.toml")).unwrap();
    let records = recheck_cli::records::read_records(&demos.join("employees.json")).unwrap();

    let outcomes = check_records(&registry, &records);
    let messages: Vec<Vec<String>> = outcomes.iter().map(|o| o.report.messages()).collect();
    let expected: Vec<Vec<String>> = demo::run().into_iter().map(|c| c.errors).collect();
    assert_eq!(messages, expected);
}
