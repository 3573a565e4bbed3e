//! Multi-source sample aggregation
//!
//! Fans out to every configured sampler concurrently, pools whatever came
//! back, and turns the pool into a single `ResaleEstimate`. Any subset of
//! samplers may fail or time out without affecting the others; an empty
//! pool is a valid zero-valued estimate, never an error.

use crate::config::AggregatorConfig;
use crate::sampler::SourceSampler;
use crate::types::{Confidence, PriceObservation, PriceRange, ResaleEstimate};
use futures_util::future::join_all;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::debug;

pub struct SampleAggregator {
    config: AggregatorConfig,
    /// Caps simultaneous heavyweight samplers; lightweight API sources
    /// bypass it entirely.
    limiter: Arc<Semaphore>,
}

impl SampleAggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        let limiter = Arc::new(Semaphore::new(config.heavyweight_concurrency.max(1)));
        Self { config, limiter }
    }

    /// Query all samplers and aggregate their observations.
    ///
    /// Results are combined commutatively, so the order samplers finish in
    /// does not affect the estimate.
    pub async fn aggregate(
        &self,
        query: &str,
        samplers: &[Arc<dyn SourceSampler>],
    ) -> ResaleEstimate {
        let tasks = samplers.iter().map(|sampler| {
            let sampler = Arc::clone(sampler);
            let limiter = Arc::clone(&self.limiter);
            let query = query.to_string();
            async move {
                let _permit = if sampler.heavyweight() {
                    limiter.acquire_owned().await.ok()
                } else {
                    None
                };
                let observations = sampler.sample(&query).await;
                debug!(
                    source = %sampler.id(),
                    count = observations.len(),
                    "sampler finished"
                );
                observations
            }
        });

        let pooled: Vec<PriceObservation> =
            join_all(tasks).await.into_iter().flatten().collect();
        let samples = self.dedup_within_source(pooled);

        self.summarize(query, samples)
    }

    /// Collapse near-equal observations coming from the same source; the
    /// same listing indexed twice must not inflate sample count. Equal
    /// values from different sources are independent corroboration and are
    /// kept.
    fn dedup_within_source(&self, observations: Vec<PriceObservation>) -> Vec<PriceObservation> {
        let mut kept: Vec<PriceObservation> = Vec::with_capacity(observations.len());
        for obs in observations {
            let duplicate = kept.iter().any(|k| {
                k.source == obs.source && self.nearly_equal(k.value, obs.value)
            });
            if duplicate {
                debug!(source = %obs.source, value = %obs.value, "dropping near-duplicate observation");
            } else {
                kept.push(obs);
            }
        }
        kept
    }

    fn nearly_equal(&self, a: Decimal, b: Decimal) -> bool {
        let denom = a.max(b);
        if denom <= Decimal::ZERO {
            return a == b;
        }
        (a - b).abs() / denom <= self.config.dedup_tolerance
    }

    fn summarize(&self, query: &str, samples: Vec<PriceObservation>) -> ResaleEstimate {
        if samples.is_empty() {
            debug!(query, "no observations from any source");
            return ResaleEstimate::empty(query);
        }

        let count = samples.len();
        let sum: Decimal = samples.iter().map(|s| s.value).sum();
        let mean = sum / Decimal::from(count as u64);
        let min = samples.iter().map(|s| s.value).min().unwrap_or(mean);
        let max = samples.iter().map(|s| s.value).max().unwrap_or(mean);

        let estimate = ResaleEstimate {
            product_query: query.to_string(),
            samples,
            mean,
            range: PriceRange { min, max },
            confidence: self.confidence_for(count),
        };
        debug!(
            query,
            count,
            mean = %estimate.mean,
            confidence = %estimate.confidence,
            "aggregation complete"
        );
        estimate
    }

    /// Monotonically non-decreasing in sample count
    fn confidence_for(&self, sample_count: usize) -> Confidence {
        if sample_count >= self.config.high_samples {
            Confidence::High
        } else if sample_count >= self.config.medium_samples {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}
