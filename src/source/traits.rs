//! Trait definitions for visit sources
//!
//! These traits abstract over where visits come from to enable testing
//! with mocks.

use crate::domain::Visit;
use crate::error::SourceError;

/// Trait for loading a visit history snapshot
///
/// Implementations guarantee every returned record carries an entry time
/// and a valid entry weight. Order is unspecified.
pub trait VisitSource: Send + Sync {
    /// Load all visits
    fn load(&self) -> Result<Vec<Visit>, SourceError>;

    /// Short description for logs and reports
    fn describe(&self) -> String;
}

/// Visits already held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    visits: Vec<Visit>,
}

impl InMemorySource {
    /// Wrap an owned visit list
    pub fn new(visits: Vec<Visit>) -> Self {
        Self { visits }
    }
}

impl VisitSource for InMemorySource {
    fn load(&self) -> Result<Vec<Visit>, SourceError> {
        Ok(self.visits.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} visits)", self.visits.len())
    }
}

impl From<Vec<Visit>> for InMemorySource {
    fn from(visits: Vec<Visit>) -> Self {
        Self::new(visits)
    }
}
