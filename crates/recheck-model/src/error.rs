use thiserror::Error;

use crate::value::ValueKind;

/// Error raised by a typed [`Value`](crate::Value) accessor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: ValueKind,
    },
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("record must be a JSON object, got {actual}")]
    NotAnObject { actual: ValueKind },
}

pub type Result<T> = std::result::Result<T, ModelError>;
