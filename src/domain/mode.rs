//! Monitoring mode
//!
//! Selects which threshold profile the evaluator applies. Modes reflect the
//! expected behavioral variance for different life stages.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Monitoring mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitoringMode {
    /// Tightest thresholds, for cats with known health issues
    Strict,
    /// Adult cat defaults
    #[default]
    Standard,
    /// Loose thresholds for growing kittens
    Kitten,
}

impl MonitoringMode {
    /// All modes, in registry order
    pub const ALL: [MonitoringMode; 3] = [Self::Strict, Self::Standard, Self::Kitten];

    /// Mode key as used in configuration and on the wire
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Standard => "standard",
            Self::Kitten => "kitten",
        }
    }

    /// Resolve an optional mode string, falling back to [`MonitoringMode::Standard`]
    ///
    /// Absent and unrecognized values never fail; an unrecognized value is
    /// logged so the fallback is visible.
    pub fn from_str_lossy(value: Option<&str>) -> Self {
        match value {
            None => Self::default(),
            Some(s) => s.parse().unwrap_or_else(|err| {
                log::warn!("{}; falling back to {}", err, Self::default());
                Self::default()
            }),
        }
    }
}

impl fmt::Display for MonitoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonitoringMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "standard" => Ok(Self::Standard),
            "kitten" => Ok(Self::Kitten),
            _ => Err(DomainError::UnknownMode(s.to_string())),
        }
    }
}
