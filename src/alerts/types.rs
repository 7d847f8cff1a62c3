//! Alert domain types
//!
//! Defines the alert record handed to the presentation layer: type,
//! severity, a fully formed message and the numeric evidence behind it.

use super::clock::EvaluationClock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Alert severity levels
///
/// Declaration order is the output ranking: `Critical < Warning < Info`,
/// so sorting ascending puts the most urgent alerts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Needs attention now
    Critical,
    /// Worth watching, may warrant a vet visit
    Warning,
    /// Informational, no action needed
    Info,
}

impl AlertSeverity {
    /// Numeric rank, 0 being the most urgent
    pub const fn rank(&self) -> u8 {
        *self as u8
    }

    /// Get color for display
    pub fn color_code(&self) -> &'static str {
        match self {
            Self::Critical => "#DC2626",
            Self::Warning => "#F59E0B",
            Self::Info => "#3B82F6",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => write!(f, "CRITICAL"),
            Self::Warning => write!(f, "WARNING"),
            Self::Info => write!(f, "INFO"),
        }
    }
}

/// Alert category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    /// Sudden weight loss within 48 hours
    WeightUrgent,
    /// Gradual weight loss against the baseline
    WeightTrend,
    /// Gradual weight gain against the baseline
    WeightGain,
    /// Burst of visits within one hour
    FrequencyCritical,
    /// More visits today than the weekly average suggests
    FrequencyHigh,
    /// No visits for too long
    FrequencyLow,
}

impl AlertType {
    /// Severity is fixed per alert type
    pub const fn severity(&self) -> AlertSeverity {
        match self {
            Self::WeightUrgent | Self::FrequencyCritical => AlertSeverity::Critical,
            Self::WeightTrend | Self::FrequencyHigh | Self::FrequencyLow => AlertSeverity::Warning,
            Self::WeightGain => AlertSeverity::Info,
        }
    }

    /// Wire name of the type
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightUrgent => "weight_urgent",
            Self::WeightTrend => "weight_trend",
            Self::WeightGain => "weight_gain",
            Self::FrequencyCritical => "frequency_critical",
            Self::FrequencyHigh => "frequency_high",
            Self::FrequencyLow => "frequency_low",
        }
    }

    /// Whether this alert comes from the weight rule set
    pub fn is_weight(&self) -> bool {
        matches!(
            self,
            Self::WeightUrgent | Self::WeightTrend | Self::WeightGain
        )
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric evidence attached to an alert
///
/// A read-only snapshot for display; the engine never reads it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TriggerData {
    /// Weight compared against the baseline
    #[serde(rename_all = "camelCase")]
    WeightChange {
        baseline_weight: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        current_weight: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        current_average: Option<f64>,
        change_percent: f64,
        timeframe: String,
    },
    /// Visits counted inside a short window
    #[serde(rename_all = "camelCase")]
    VisitBurst {
        visit_count: usize,
        timeframe: String,
        threshold: u32,
    },
    /// Today's visits against the weekly daily average
    #[serde(rename_all = "camelCase")]
    ActivityIncrease {
        today_count: usize,
        average_count: f64,
        increase_percent: f64,
    },
    /// No visits inside the inactivity window
    #[serde(rename_all = "camelCase")]
    Inactivity {
        hours_since_last_visit: i64,
        last_visit_time: Option<DateTime<Utc>>,
    },
}

/// A health alert produced by one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Unique within one evaluation
    pub id: String,
    /// Alert category
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    /// Alert severity
    pub severity: AlertSeverity,
    /// Human-readable message, ready for display
    pub message: String,
    /// Evidence behind the alert
    pub trigger_data: TriggerData,
    /// Evaluation instant, not the time of the underlying visits
    pub created_at: DateTime<Utc>,
}

impl Alert {
    /// Create an alert stamped with the evaluation instant
    pub fn new(
        alert_type: AlertType,
        message: String,
        trigger_data: TriggerData,
        clock: &EvaluationClock,
    ) -> Self {
        let created_at = clock.now();
        let id = format!("{}_{}", alert_type, created_at.timestamp_millis());

        Self {
            id,
            alert_type,
            severity: alert_type.severity(),
            message,
            trigger_data,
            created_at,
        }
    }
}

/// Round to a fixed number of decimal places for display evidence
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
