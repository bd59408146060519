//! Library components of the `recheck` command-line tool.

pub mod demo;
pub mod logging;
pub mod records;
