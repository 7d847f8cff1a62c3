//! Alert evaluator
//!
//! Runs the weight and frequency rule sets over one snapshot of visits and
//! ranks the result by severity. Holds no state between calls.

use super::baseline::BaselineCalculator;
use super::clock::EvaluationClock;
use super::thresholds::ThresholdProfile;
use super::types::Alert;
use super::{frequency, weight};
use crate::domain::{MonitoringMode, Visit};

/// Name used in messages when the caller does not supply one
pub const DEFAULT_CAT_NAME: &str = "Your cat";

/// Inputs shared by every rule in one evaluation
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub clock: EvaluationClock,
    pub thresholds: &'static ThresholdProfile,
    pub cat_name: &'a str,
}

/// Alert evaluator
#[derive(Debug, Clone)]
pub struct AlertEvaluator {
    mode: MonitoringMode,
    baseline: BaselineCalculator,
    cat_name: String,
}

impl AlertEvaluator {
    /// Create an evaluator for a monitoring mode
    pub fn new(mode: MonitoringMode) -> Self {
        Self {
            mode,
            baseline: BaselineCalculator::default(),
            cat_name: DEFAULT_CAT_NAME.to_string(),
        }
    }

    /// Set the name used in alert messages
    pub fn with_cat_name(mut self, name: impl Into<String>) -> Self {
        self.cat_name = name.into();
        self
    }

    /// Replace the baseline calculator
    pub fn with_baseline(mut self, baseline: BaselineCalculator) -> Self {
        self.baseline = baseline;
        self
    }

    /// Active monitoring mode
    pub fn mode(&self) -> MonitoringMode {
        self.mode
    }

    /// Thresholds for the active mode
    pub fn thresholds(&self) -> &'static ThresholdProfile {
        ThresholdProfile::for_mode(self.mode)
    }

    /// Name used in alert messages
    pub fn cat_name(&self) -> &str {
        &self.cat_name
    }

    /// Evaluate a visit snapshot at a fixed instant
    ///
    /// Visits may be in any order and are never modified. Alerts come back
    /// critical first; equal severities keep weight-before-frequency
    /// generation order.
    pub fn evaluate(&self, visits: &[Visit], clock: &EvaluationClock) -> Vec<Alert> {
        let ctx = RuleContext {
            clock: *clock,
            thresholds: self.thresholds(),
            cat_name: &self.cat_name,
        };

        log::debug!(
            "Evaluating {} visits in {} mode at {}",
            visits.len(),
            self.mode,
            clock.now()
        );

        let alerts = aggregate(
            weight::evaluate(visits, &self.baseline, &ctx),
            frequency::evaluate(visits, &ctx),
        );

        log::debug!("Evaluation produced {} alerts", alerts.len());
        alerts
    }

    /// Evaluate at the current system time, sampled once
    pub fn evaluate_now(&self, visits: &[Visit]) -> Vec<Alert> {
        self.evaluate(visits, &EvaluationClock::system())
    }
}

impl Default for AlertEvaluator {
    fn default() -> Self {
        Self::new(MonitoringMode::default())
    }
}

/// Concatenate rule outputs and stably rank them by severity
pub fn aggregate(weight_alerts: Vec<Alert>, frequency_alerts: Vec<Alert>) -> Vec<Alert> {
    let mut alerts = weight_alerts;
    alerts.extend(frequency_alerts);
    // sort_by_key is stable
    alerts.sort_by_key(|a| a.severity);
    alerts
}
