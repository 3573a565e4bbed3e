//! Price checker façade
//!
//! Wires sampling, aggregation, scoring, and classification into one call
//! per candidate listing. Stateless across calls: every check recomputes
//! the estimate from live sources.

use crate::aggregator::SampleAggregator;
use crate::classifier::DealClassifier;
use crate::config::Config;
use crate::error::Result;
use crate::sampler::{
    EbaySoldSampler, GoogleShoppingSampler, MercadoLibreApiSampler, SourceSampler,
};
use crate::scorer::OpportunityScorer;
use crate::types::{DealReport, ResaleEstimate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

pub struct PriceChecker {
    aggregator: SampleAggregator,
    scorer: OpportunityScorer,
    classifier: DealClassifier,
    samplers: Vec<Arc<dyn SourceSampler>>,
}

impl PriceChecker {
    /// Checker with the default marketplace sources.
    pub fn new(config: &Config) -> Result<Self> {
        let samplers: Vec<Arc<dyn SourceSampler>> = vec![
            Arc::new(MercadoLibreApiSampler::new(config.sampler.clone())?),
            Arc::new(EbaySoldSampler::new(config.sampler.clone())?),
            Arc::new(GoogleShoppingSampler::new(config.sampler.clone())?),
        ];
        Ok(Self::with_samplers(config, samplers))
    }

    /// Checker over an explicit sampler set; the scraping layer supplies
    /// anything satisfying the `SourceSampler` capability.
    pub fn with_samplers(config: &Config, samplers: Vec<Arc<dyn SourceSampler>>) -> Self {
        Self {
            aggregator: SampleAggregator::new(config.aggregator.clone()),
            scorer: OpportunityScorer::new(config.scorer.clone()),
            classifier: DealClassifier::new(config.classifier.clone()),
            samplers,
        }
    }

    /// Aggregated resale estimate for a product query.
    pub async fn estimate(&self, query: &str) -> ResaleEstimate {
        self.aggregator.aggregate(query, &self.samplers).await
    }

    /// Full pipeline for one candidate listing.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `current_price <= 0`.
    pub async fn check(&self, query: &str, current_price: Decimal) -> Result<DealReport> {
        let estimate = self.estimate(query).await;
        let verdict = self.scorer.score(current_price, &estimate)?;
        let tier = self.classifier.classify(verdict.profit_ratio * dec!(100));

        Ok(DealReport {
            product_query: query.to_string(),
            current_price,
            estimate,
            verdict,
            tier,
        })
    }
}
