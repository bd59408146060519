//! Rule files.
//!
//! Rules can be declared in TOML instead of code:
//!
//! ```toml
//! schema = "recheck.rules"
//! schema_version = 1
//!
//! [[rule]]
//! field = "age"
//! check = "int_between"
//! min = 0
//! max = 150
//! message = "Age must be an integer between 0 and 150"
//! ```
//!
//! Rules are registered in file order, which is also their evaluation order
//! within a field.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::checks::Check;
use crate::error::LoadError;
use crate::rule::{Rule, RuleRegistry};

/// Environment variable overriding the default rule file location.
pub const RULES_ENV_VAR: &str = "RECHECK_RULES";

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_RULES_FILE: &str = "recheck.rules.toml";

pub const RULES_SCHEMA: &str = "recheck.rules";
pub const RULES_SCHEMA_VERSION: u32 = 1;

/// Resolve the rule file path.
///
/// Resolution order:
/// 1. `RECHECK_RULES` environment variable
/// 2. `recheck.rules.toml` in the working directory
pub fn default_rules_path() -> PathBuf {
    if let Ok(path) = std::env::var(RULES_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_RULES_FILE)
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    schema: String,
    schema_version: u32,
    #[serde(default, rename = "rule")]
    rules: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize)]
struct RuleEntry {
    field: String,
    message: String,
    #[serde(flatten)]
    check: Check,
}

/// Load a rule registry from a TOML file.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, not valid TOML, or
/// declares an unsupported schema or an unusable rule.
pub fn load_rules(path: &Path) -> Result<RuleRegistry, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let registry = parse_rules(&contents, &path.display().to_string())?;
    info!(
        path = %path.display(),
        fields = registry.len(),
        rules = registry.rule_count(),
        "loaded rules"
    );
    Ok(registry)
}

/// Parse a rule registry from TOML text. `origin` names the source in errors.
pub fn parse_rules(contents: &str, origin: &str) -> Result<RuleRegistry, LoadError> {
    let file: RuleFile = toml::from_str(contents).map_err(|source| LoadError::Toml {
        origin: origin.to_string(),
        source,
    })?;

    if file.schema != RULES_SCHEMA {
        return Err(LoadError::InvalidSchema {
            origin: origin.to_string(),
            message: format!("unsupported schema: {}", file.schema),
        });
    }
    if file.schema_version != RULES_SCHEMA_VERSION {
        return Err(LoadError::InvalidSchema {
            origin: origin.to_string(),
            message: format!("unsupported schema_version: {}", file.schema_version),
        });
    }

    let mut registry = RuleRegistry::new();
    for (index, entry) in file.rules.into_iter().enumerate() {
        let invalid = |message: String| LoadError::InvalidRule {
            origin: origin.to_string(),
            index: index + 1,
            message,
        };
        let field = entry.field.trim();
        if field.is_empty() {
            return Err(invalid("field name is empty".to_string()));
        }
        let predicate = entry
            .check
            .predicate()
            .map_err(|e| invalid(e.to_string()))?;
        debug!(field, check = entry.check.name(), "rule entry");
        registry.insert(field, Rule::new(predicate, entry.message));
    }
    Ok(registry)
}
