use std::path::PathBuf;

use recheck_model::ValueError;

/// A predicate could not decide. Distinct from a predicate returning `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleFault {
    #[error(transparent)]
    Value(#[from] ValueError),

    #[error("{0}")]
    Message(String),

    #[error("predicate panicked: {0}")]
    Panicked(String),
}

impl RuleFault {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

/// Errors raised while loading a rule file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("rule file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read rule file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rule file {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid rule file {origin}: {message}")]
    InvalidSchema { origin: String, message: String },

    #[error("invalid rule #{index} in {origin}: {message}")]
    InvalidRule {
        origin: String,
        index: usize,
        message: String,
    },
}

/// A built-in check was configured with unusable parameters.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("empty range: min {min} is greater than max {max}")]
    EmptyRange { min: String, max: String },
}
