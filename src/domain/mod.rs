//! Domain models for litterwatch
//!
//! This module contains all domain types with validation.
//! Types are validated on construction (fail-fast pattern).

pub mod mode;
pub mod visit;

pub use mode::MonitoringMode;
pub use visit::{Visit, Weight};
