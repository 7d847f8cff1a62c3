//! Evaluation clock
//!
//! One evaluation reads "now" exactly once. Every time window the rules
//! look at is derived from this single instant, so overlapping windows
//! stay consistent within a pass and evaluations are reproducible.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveTime, Offset, Utc};

/// The instant an evaluation runs at, plus the owner's UTC offset
///
/// The offset only matters for "today", which starts at local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationClock {
    now: DateTime<Utc>,
    offset: FixedOffset,
}

impl EvaluationClock {
    /// Clock fixed at `now`, with days starting at UTC midnight
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            offset: Utc.fix(),
        }
    }

    /// Sample the system clock and the host's local offset once
    pub fn system() -> Self {
        let local = Local::now();
        Self {
            now: local.with_timezone(&Utc),
            offset: local.offset().fix(),
        }
    }

    /// Use a caller-supplied timestamp and keep its offset for local midnight
    pub fn from_fixed(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: now.with_timezone(&Utc),
            offset: *now.offset(),
        }
    }

    /// Override the offset used for local midnight
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// The evaluation instant
    #[inline]
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Offset used to find local midnight
    #[inline]
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// `now` minus a number of hours
    pub fn hours_ago(&self, hours: u32) -> DateTime<Utc> {
        self.now - Duration::hours(i64::from(hours))
    }

    /// `now` minus a number of days
    pub fn days_ago(&self, days: u32) -> DateTime<Utc> {
        self.now - Duration::days(i64::from(days))
    }

    /// Local midnight at the start of the evaluation day, as UTC
    pub fn start_of_day(&self) -> DateTime<Utc> {
        let local_midnight = self
            .now
            .with_timezone(&self.offset)
            .date_naive()
            .and_time(NaiveTime::MIN);

        local_midnight.and_utc() - Duration::seconds(i64::from(self.offset.local_minus_utc()))
    }
}
