//! Core value objects
//!
//! Everything here is created per request and discarded after use; none of
//! these types carries identity beyond its fields or is mutated after
//! construction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one external price source (marketplace search surface or
/// listing feed).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One raw price observation attributed to a source. Immutable once captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Source that produced the observation
    pub source: SourceId,
    /// Observed price
    pub value: Decimal,
    /// Capture timestamp
    pub observed_at: DateTime<Utc>,
}

impl PriceObservation {
    pub fn new(source: SourceId, value: Decimal) -> Self {
        Self {
            source,
            value,
            observed_at: Utc::now(),
        }
    }
}

/// Sample-count-derived trust in an estimate.
///
/// Ordering matters: `Low < Medium < High`, so threshold checks can compare
/// variants directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    #[default]
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Low => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::High => write!(f, "high"),
        }
    }
}

/// Observed price spread
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} - ${}", self.min, self.max)
    }
}

/// Aggregated fair-value judgment for one product query.
///
/// Recomputed fresh on every request; never cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResaleEstimate {
    /// Free-text query the samplers were asked for
    pub product_query: String,
    /// Pooled observations, in arrival order
    pub samples: Vec<PriceObservation>,
    /// Arithmetic average of all observation values
    pub mean: Decimal,
    /// Observed (min, max) spread
    pub range: PriceRange,
    /// Trust level derived from sample count
    pub confidence: Confidence,
}

impl ResaleEstimate {
    /// Zero-valued estimate for a query that produced no observations.
    /// This is a valid terminal state, not an error.
    pub fn empty(product_query: impl Into<String>) -> Self {
        Self {
            product_query: product_query.into(),
            samples: Vec::new(),
            mean: Decimal::ZERO,
            range: PriceRange::default(),
            confidence: Confidence::Low,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn has_samples(&self) -> bool {
        !self.samples.is_empty()
    }
}

/// Judgment of whether one listing price is a profitable resale opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityVerdict {
    /// Whether the listing clears every gate (profit, ratio, confidence)
    pub is_good_deal: bool,
    /// `estimate.mean - current_price`
    pub profit_amount: Decimal,
    /// `profit_amount / current_price`
    pub profit_ratio: Decimal,
    /// Carried over from the estimate
    pub confidence: Confidence,
    /// Diagnostic summary of the two prices and the computed profit.
    /// Never a decision input.
    pub reasoning: String,
}

/// Severity bucket used to route notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealTier {
    None,
    Good,
    Excellent,
}

impl fmt::Display for DealTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealTier::None => write!(f, "none"),
            DealTier::Good => write!(f, "good"),
            DealTier::Excellent => write!(f, "excellent"),
        }
    }
}

/// Full result for one candidate listing, consumed by the notifier boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealReport {
    pub product_query: String,
    pub current_price: Decimal,
    pub estimate: ResaleEstimate,
    pub verdict: OpportunityVerdict,
    pub tier: DealTier,
}
