//! Alert service
//!
//! Loads a visit snapshot from a source and runs one evaluation over it.

use crate::alerts::{Alert, AlertEvaluator, AlertSeverity, EvaluationClock};
use crate::domain::MonitoringMode;
use crate::error::AppError;
use crate::source::VisitSource;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of one evaluation, ready for rendering
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertReport {
    /// Name used in alert messages
    pub cat_name: String,
    /// Mode the thresholds came from
    pub mode: MonitoringMode,
    /// Evaluation instant
    pub evaluated_at: DateTime<Utc>,
    /// Where the visits came from
    pub source: String,
    /// Number of visits evaluated
    pub visit_count: usize,
    /// Alerts, most severe first
    pub alerts: Vec<Alert>,
}

impl AlertReport {
    /// Count alerts of one severity
    pub fn count_by_severity(&self, severity: AlertSeverity) -> usize {
        self.alerts.iter().filter(|a| a.severity == severity).count()
    }

    /// Whether any critical alert is present
    pub fn has_critical(&self) -> bool {
        self.count_by_severity(AlertSeverity::Critical) > 0
    }
}

/// Alert service for one cat
pub struct AlertService<S: VisitSource> {
    source: S,
    evaluator: AlertEvaluator,
}

impl<S: VisitSource> AlertService<S> {
    /// Create a new alert service
    pub fn new(source: S, evaluator: AlertEvaluator) -> Self {
        Self { source, evaluator }
    }

    /// Evaluator used by this service
    pub fn evaluator(&self) -> &AlertEvaluator {
        &self.evaluator
    }

    /// Load visits and evaluate them at `clock`
    pub fn run(&self, clock: &EvaluationClock) -> Result<AlertReport, AppError> {
        let visits = self.source.load()?;
        let alerts = self.evaluator.evaluate(&visits, clock);

        for alert in &alerts {
            log::info!("{} {}: {}", alert.severity, alert.alert_type, alert.message);
        }

        Ok(AlertReport {
            cat_name: self.evaluator.cat_name().to_string(),
            mode: self.evaluator.mode(),
            evaluated_at: clock.now(),
            source: self.source.describe(),
            visit_count: visits.len(),
            alerts,
        })
    }
}
