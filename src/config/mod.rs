//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::alerts::{AlertEvaluator, DEFAULT_CAT_NAME};
use crate::domain::MonitoringMode;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Monitoring settings
    pub monitor: MonitorConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
}

impl GeneralConfig {
    /// Default `env_logger` filter for this verbosity
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Monitoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Threshold profile name (strict, standard, kitten)
    ///
    /// Kept as a string so an unknown value in the file falls back to
    /// standard instead of rejecting the whole config.
    pub mode: Option<String>,
    /// Name used in alert messages
    pub cat_name: String,
    /// Default visit history file
    pub visits_path: Option<String>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            mode: None,
            cat_name: DEFAULT_CAT_NAME.to_string(),
            visits_path: None,
        }
    }
}

impl MonitorConfig {
    /// Resolve the configured mode, falling back to standard
    pub fn monitoring_mode(&self) -> MonitoringMode {
        MonitoringMode::from_str_lossy(self.mode.as_deref())
    }

    /// Build an evaluator from this configuration
    pub fn to_evaluator(&self) -> AlertEvaluator {
        AlertEvaluator::new(self.monitoring_mode()).with_cat_name(self.cat_name.clone())
    }
}
