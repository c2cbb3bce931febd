//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckResult, check_word};
pub use simple::{LineOutcome, handle_line, run_simple};
