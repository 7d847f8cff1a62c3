//! Threshold registry
//!
//! A process-wide constant table with exactly one profile per
//! [`MonitoringMode`]. Ratios are fractions (0.03 = 3%).

use crate::domain::MonitoringMode;
use serde::Serialize;

/// Weight-change thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightThresholds {
    /// Loss ratio within 48 hours that raises a critical alert
    pub urgent: f64,
    /// Loss ratio of the 7-day average against baseline that raises a warning
    pub trend: f64,
    /// Gain ratio of the 7-day average against baseline that raises an info alert
    pub gain: f64,
}

/// Visit-frequency thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyThresholds {
    /// Visits within one hour that raise a critical alert
    pub critical: u32,
    /// Excess over the 7-day daily average that raises a warning
    pub high_percent: f64,
    /// Hours without any visit that raise a warning
    pub low_hours: u32,
}

/// Thresholds applied by one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdProfile {
    pub weight: WeightThresholds,
    pub frequency: FrequencyThresholds,
}

static STRICT: ThresholdProfile = ThresholdProfile {
    weight: WeightThresholds {
        urgent: 0.02,
        trend: 0.04,
        gain: 0.04,
    },
    frequency: FrequencyThresholds {
        critical: 2,
        high_percent: 0.3,
        low_hours: 24,
    },
};

static STANDARD: ThresholdProfile = ThresholdProfile {
    weight: WeightThresholds {
        urgent: 0.03,
        trend: 0.05,
        gain: 0.05,
    },
    frequency: FrequencyThresholds {
        critical: 3,
        high_percent: 0.5,
        low_hours: 24,
    },
};

static KITTEN: ThresholdProfile = ThresholdProfile {
    weight: WeightThresholds {
        urgent: 0.04,
        trend: 0.07,
        gain: 0.07,
    },
    frequency: FrequencyThresholds {
        critical: 5,
        high_percent: 1.0,
        low_hours: 36,
    },
};

impl ThresholdProfile {
    /// Look up the profile for a mode
    pub fn for_mode(mode: MonitoringMode) -> &'static ThresholdProfile {
        match mode {
            MonitoringMode::Strict => &STRICT,
            MonitoringMode::Standard => &STANDARD,
            MonitoringMode::Kitten => &KITTEN,
        }
    }
}
