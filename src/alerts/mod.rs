//! Health alert engine
//!
//! Derives a baseline from a cat's visit history and flags weight and
//! visit-frequency deviations as severity-ranked alerts.

mod baseline;
mod clock;
mod evaluator;
mod frequency;
mod thresholds;
mod types;
mod weight;

pub use baseline::{mean_weight_since, Baseline, BaselineCalculator};
pub use clock::EvaluationClock;
pub use evaluator::{aggregate, AlertEvaluator, RuleContext, DEFAULT_CAT_NAME};
pub use thresholds::{FrequencyThresholds, ThresholdProfile, WeightThresholds};
pub use types::{Alert, AlertSeverity, AlertType, TriggerData};
pub use weight::TrendSample;
