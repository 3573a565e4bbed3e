//! Resale Radar
//!
//! A price-monitoring bot that estimates fair resale value from multiple
//! noisy marketplace sources and flags profitable listings.
//!
//! ## Architecture
//!
//! ```text
//! SourceSampler[] → SampleAggregator → OpportunityScorer → DealClassifier → Notifier
//!   (ML / eBay /        (pool +            (profit +           (tier
//!    Google)           confidence)       confidence gate)     routing)
//! ```

pub mod aggregator;
pub mod checker;
pub mod classifier;
pub mod config;
pub mod error;
pub mod notify;
pub mod sampler;
pub mod scorer;
pub mod types;

#[cfg(test)]
mod types_tests;
#[cfg(test)]
mod config_tests;
