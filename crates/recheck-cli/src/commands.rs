use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use recheck_cli::demo::{self, DemoCase};
use recheck_cli::records::{check_records, read_records};
use recheck_validate::checks::CATALOG;
use recheck_validate::load_rules;
use recheck_validate::loader::default_rules_path;

use crate::cli::{OutputArg, ValidateArgs};
use crate::summary::{apply_table_style, print_outcomes};

/// Validate a record file. Returns true when every record passed.
pub fn run_validate(args: &ValidateArgs) -> Result<bool> {
    let rules_path = args.rules.clone().unwrap_or_else(default_rules_path);
    let span = info_span!("validate", rules = %rules_path.display());
    let _guard = span.enter();

    let registry = load_rules(&rules_path).context("load rules")?;
    let records = read_records(&args.records)?;
    let outcomes = check_records(&registry, &records);
    let all_valid = outcomes.iter().all(|o| o.report.valid);

    match args.output {
        OutputArg::Table => print_outcomes(&outcomes),
        OutputArg::Json => {
            let json = serde_json::to_string_pretty(&outcomes).context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(all_valid)
}

pub fn run_checks() {
    let mut table = Table::new();
    table.set_header(vec!["Check", "Parameters", "Passes when"]);
    apply_table_style(&mut table);
    for (name, params, description) in CATALOG {
        let params = if params.is_empty() { "-" } else { *params };
        table.add_row(vec![*name, params, *description]);
    }
    println!("{table}");
}

/// Run the walkthrough. Returns true when every sample passed.
pub fn run_demo() -> bool {
    let cases = demo::run();
    for (idx, case) in cases.iter().enumerate() {
        print_case(idx + 1, case);
    }
    let passed = cases.iter().filter(|c| c.valid).count();
    println!();
    println!("{passed}/{} records passed", cases.len());
    passed == cases.len()
}

fn print_case(number: usize, case: &DemoCase) {
    println!();
    println!("--- Test Case {number} ---");
    println!("Data: {}", case.record);
    if case.valid {
        println!("Validation passed");
    } else {
        println!("Validation failed");
        println!("Errors:");
        for error in &case.errors {
            println!("  - {error}");
        }
    }
}
