//! Baseline weight calculation
//!
//! The baseline is the mean entry weight over a window that ends a week
//! before the evaluation instant, so it reflects a settled past state rather
//! than the data being judged. It is the denominator of every weight-change
//! ratio.

use super::clock::EvaluationClock;
use crate::domain::Visit;
use chrono::{DateTime, Utc};

/// Reference weight derived from the baseline window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    /// Mean entry weight in kilograms
    pub weight_kg: f64,
    /// Number of visits averaged
    pub sample_count: usize,
}

/// Baseline calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineCalculator {
    /// Window start, in days before now (inclusive)
    window_start_days: u32,
    /// Window end, in days before now (inclusive)
    window_end_days: u32,
    /// Minimum age of the oldest visit before weight rules run
    min_history_days: u32,
}

impl Default for BaselineCalculator {
    fn default() -> Self {
        Self {
            window_start_days: 14,
            window_end_days: 7,
            min_history_days: 7,
        }
    }
}

impl BaselineCalculator {
    /// Create a calculator with a custom window
    ///
    /// # Panics
    /// If the window ends before it starts.
    pub fn new(window_start_days: u32, window_end_days: u32, min_history_days: u32) -> Self {
        assert!(
            window_start_days >= window_end_days,
            "Baseline window must start before it ends ({} < {})",
            window_start_days,
            window_end_days
        );

        Self {
            window_start_days,
            window_end_days,
            min_history_days,
        }
    }

    /// Window bounds as absolute instants, both inclusive
    pub fn window(&self, clock: &EvaluationClock) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            clock.days_ago(self.window_start_days),
            clock.days_ago(self.window_end_days),
        )
    }

    /// Whether the history is old enough to judge weight
    ///
    /// False when there are no visits or when the oldest visit is newer than
    /// the minimum history age. Input order does not matter.
    pub fn has_sufficient_history(&self, visits: &[Visit], clock: &EvaluationClock) -> bool {
        let cutoff = clock.days_ago(self.min_history_days);
        visits
            .iter()
            .map(|v| v.entry_time)
            .min()
            .is_some_and(|oldest| oldest <= cutoff)
    }

    /// Compute the baseline, or `None` when the window holds no visits
    pub fn calculate(&self, visits: &[Visit], clock: &EvaluationClock) -> Option<Baseline> {
        let (start, end) = self.window(clock);
        let in_window = visits
            .iter()
            .filter(|v| v.entry_time >= start && v.entry_time <= end);

        let (sum, count) = in_window.fold((0.0, 0usize), |(sum, n), v| {
            (sum + v.weight_kg(), n + 1)
        });
        if count == 0 {
            return None;
        }

        Some(Baseline {
            weight_kg: sum / count as f64,
            sample_count: count,
        })
    }
}

/// Mean entry weight of visits at or after `since`
pub fn mean_weight_since(visits: &[Visit], since: DateTime<Utc>) -> Option<f64> {
    let (sum, count) = visits
        .iter()
        .filter(|v| v.entry_time >= since)
        .fold((0.0, 0usize), |(sum, n), v| (sum + v.weight_kg(), n + 1));

    (count > 0).then(|| sum / count as f64)
}
