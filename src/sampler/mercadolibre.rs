//! MercadoLibre search API sampler
//!
//! The only source with a usable JSON API: one GET against the MLM site
//! search endpoint, filtered to the electronics category and the used-goods
//! query suffix.

use super::{in_price_bounds, SourceSampler};
use crate::config::SamplerConfig;
use crate::error::Result;
use crate::types::{PriceObservation, SourceId};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

const SEARCH_URL: &str = "https://api.mercadolibre.com/sites/MLM/search";
const ELECTRONICS_CATEGORY: &str = "MLM1055";

pub struct MercadoLibreApiSampler {
    http: reqwest::Client,
    config: SamplerConfig,
    source: SourceId,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    price: Option<Decimal>,
}

impl MercadoLibreApiSampler {
    pub fn new(config: SamplerConfig) -> Result<Self> {
        Ok(Self {
            http: super::http_client(&config)?,
            config,
            source: SourceId::new("mercadolibre_usado"),
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<Decimal>> {
        let response: SearchResponse = self
            .http
            .get(SEARCH_URL)
            .query(&[
                ("q", format!("{query} usado")),
                ("category", ELECTRONICS_CATEGORY.to_string()),
                ("limit", self.config.max_results_per_source.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .results
            .into_iter()
            .filter_map(|item| item.price)
            .filter(|p| in_price_bounds(*p, &self.config))
            .take(self.config.max_results_per_source)
            .collect())
    }
}

#[async_trait]
impl SourceSampler for MercadoLibreApiSampler {
    async fn sample(&self, query: &str) -> Vec<PriceObservation> {
        match self.search(query).await {
            Ok(prices) => {
                debug!(source = %self.source, count = prices.len(), "search complete");
                super::to_observations(&self.source, prices)
            }
            Err(e) => {
                warn!(source = %self.source, error = %e, "search failed, returning no observations");
                Vec::new()
            }
        }
    }

    fn id(&self) -> SourceId {
        self.source.clone()
    }
}
