//! Litter-box visit domain types
//!
//! Provides validated types for visit records as produced by the tracker
//! backend. Field names follow the backend's camelCase JSON.

use crate::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body weight in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    /// Create a new Weight, validating it is finite and non-negative
    pub fn new(kilograms: f64) -> Result<Self, DomainError> {
        if !kilograms.is_finite() || kilograms < 0.0 {
            return Err(DomainError::InvalidWeight(kilograms));
        }
        Ok(Self(kilograms))
    }

    /// Get the weight in kilograms
    #[inline]
    pub const fn as_kg(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kg", self.0)
    }
}

impl TryFrom<f64> for Weight {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

/// A single litter-box visit
///
/// Records are immutable once produced; the evaluator only ever borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    /// Backend identifier
    pub id: String,
    /// When the cat entered the box
    pub entry_time: DateTime<Utc>,
    /// Weight measured on entry
    pub weight_in: Weight,
    /// Weight of waste left behind (not used for alerting)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste_weight: Option<Weight>,
    /// When the cat left the box (not used for alerting)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_time: Option<DateTime<Utc>>,
}

impl Visit {
    /// Create a visit with only the fields the alert engine consumes
    pub fn new(id: impl Into<String>, entry_time: DateTime<Utc>, weight_in: Weight) -> Self {
        Self {
            id: id.into(),
            entry_time,
            weight_in,
            waste_weight: None,
            exit_time: None,
        }
    }

    /// Entry weight in kilograms
    #[inline]
    pub fn weight_kg(&self) -> f64 {
        self.weight_in.as_kg()
    }
}
