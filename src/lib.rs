//! litterwatch - cat health alert library
//!
//! This library derives a baseline from a cat's litter-box visit history
//! and flags sudden weight loss, weight trends, and abnormal visit frequency
//! as severity-ranked alerts.
//!
//! # Modules
//!
//! - [`alerts`]: Alert evaluator, thresholds and rules
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`services`]: Evaluation services
//! - [`source`]: Visit data sources

pub mod alerts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod source;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
