//! Service layer
//!
//! Services tie a visit source to the alert evaluator.

pub mod alert_service;

pub use alert_service::{AlertReport, AlertService};
