//! eBay sold-listings sampler
//!
//! Fetches the completed/sold search page for the Mexican site and pulls
//! prices out of the listing markup. Sold prices are what resellers
//! actually received, which makes this the most honest source when it
//! answers at all.

use super::SourceSampler;
use crate::config::SamplerConfig;
use crate::error::Result;
use crate::types::{PriceObservation, SourceId};
use async_trait::async_trait;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;
use tracing::{debug, warn};

const SEARCH_URL: &str = "https://www.ebay.com.mx/sch/i.html";

static LISTING_PRICE_RE: OnceLock<Regex> = OnceLock::new();

fn listing_price_re() -> &'static Regex {
    // Text content of the s-item__price span in search result markup
    LISTING_PRICE_RE.get_or_init(|| Regex::new(r#"s-item__price[^>]*>([^<]+)<"#).unwrap())
}

pub struct EbaySoldSampler {
    http: reqwest::Client,
    config: SamplerConfig,
    source: SourceId,
}

impl EbaySoldSampler {
    pub fn new(config: SamplerConfig) -> Result<Self> {
        Ok(Self {
            http: super::http_client(&config)?,
            config,
            source: SourceId::new("ebay"),
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<Decimal>> {
        let body = self
            .http
            .get(SEARCH_URL)
            .query(&[
                ("_nkw", format!("{query} usado")),
                ("_sacat", "0".to_string()),
                ("rt", "nc".to_string()),
                ("LH_Sold", "1".to_string()),
                ("LH_Complete", "1".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let captures = listing_price_re()
            .captures_iter(&body)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str());
        Ok(super::collect_prices(captures, &self.config))
    }
}

#[async_trait]
impl SourceSampler for EbaySoldSampler {
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

    fn heavyweight(&self) -> bool {
        true
    }
}
