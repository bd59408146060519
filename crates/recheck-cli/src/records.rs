//! Reading record files and checking them against a registry.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use recheck_model::Record;
use recheck_validate::{RuleRegistry, ValidationReport};
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::logging::redact_value;

/// Outcome for one record, numbered from 1 in input order.
#[derive(Debug, Clone, Serialize)]
pub struct RecordOutcome {
    pub index: usize,
    #[serde(flatten)]
    pub report: ValidationReport,
}

/// Parse a JSON object or an array of JSON objects into records.
pub fn parse_records(contents: &str) -> Result<Vec<Record>> {
    let json: serde_json::Value =
        serde_json::from_str(contents).context("records are not valid JSON")?;
    match json {
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                Record::try_from(item).with_context(|| format!("record #{}", idx + 1))
            })
            .collect(),
        serde_json::Value::Object(_) => Ok(vec![Record::try_from(json)?]),
        other => bail!(
            "records must be a JSON object or an array of objects, got {}",
            recheck_model::Value::from(other).kind()
        ),
    }
}

/// Read records from `path`, or from stdin when `path` is `-`.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let contents = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read records from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read records from {}", path.display()))?
    };
    parse_records(&contents)
}

/// Check every record, keeping input order.
pub fn check_records(registry: &RuleRegistry, records: &[Record]) -> Vec<RecordOutcome> {
    let outcomes: Vec<RecordOutcome> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let index = idx + 1;
            for (field, value) in record {
                trace!(index, field = %field, value = %redact_value(value), "record field");
            }
            let report = registry.check(record);
            debug!(index, valid = report.valid, failures = report.failures.len(), "record checked");
            RecordOutcome { index, report }
        })
        .collect();
    let invalid = outcomes.iter().filter(|o| !o.report.valid).count();
    info!(records = outcomes.len(), invalid, "validation finished");
    outcomes
}
