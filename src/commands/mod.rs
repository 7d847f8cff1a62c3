//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod evaluate;
pub mod thresholds;

pub use evaluate::run_evaluate;
pub use thresholds::run_thresholds;
