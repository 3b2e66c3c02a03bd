//! Command implementations for drift-cli

pub mod check;

pub use check::{run_check, CheckOptions};
