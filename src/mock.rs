//! Mock implementations for testing
//!
//! Provides a fixed evaluation clock, visit builders relative to it and an
//! in-memory visit source, so rules can be tested without real data files.

use crate::alerts::EvaluationClock;
use crate::domain::{Visit, Weight};
use crate::error::SourceError;
use crate::source::VisitSource;

use chrono::{Duration, TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Friday 2024-03-15 12:00:00 UTC, days starting at UTC midnight
pub fn fixed_clock() -> EvaluationClock {
    EvaluationClock::at(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap())
}

/// Visit entered `minutes` before the clock's instant
pub fn visit_minutes_ago(clock: &EvaluationClock, minutes: i64, weight_kg: f64) -> Visit {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    Visit::new(
        format!("mock-{}", id),
        clock.now() - Duration::minutes(minutes),
        Weight::new(weight_kg).unwrap(),
    )
}

/// Visit entered `hours` before the clock's instant
pub fn visit_at(clock: &EvaluationClock, hours: i64, weight_kg: f64) -> Visit {
    visit_minutes_ago(clock, hours * 60, weight_kg)
}

/// Mock visit source
///
/// Returns a preset history, or fails like a missing file when told to.
#[derive(Debug, Default)]
pub struct MockSource {
    visits: Mutex<Vec<Visit>>,
    fail: bool,
}

impl MockSource {
    /// Create a source returning `visits`
    pub fn new(visits: Vec<Visit>) -> Self {
        Self {
            visits: Mutex::new(visits),
            fail: false,
        }
    }

    /// Create a source that always fails
    pub fn failing() -> Self {
        Self {
            visits: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Append a visit, as if the tracker recorded a new one
    pub fn push(&self, visit: Visit) {
        self.visits.lock().unwrap().push(visit);
    }
}

impl VisitSource for MockSource {
    fn load(&self) -> Result<Vec<Visit>, SourceError> {
        if self.fail {
            return Err(SourceError::FileNotFound("mock".to_string()));
        }
        Ok(self.visits.lock().unwrap().clone())
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
