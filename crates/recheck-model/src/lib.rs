//! Value and record types shared by the recheck crates.

pub mod error;
pub mod record;
pub mod value;

pub use error::{ModelError, Result, ValueError};
pub use record::Record;
pub use value::{Value, ValueKind};
