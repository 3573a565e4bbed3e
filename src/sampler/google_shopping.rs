//! Google Shopping sampler
//!
//! Fetches the shopping search results page and pulls prices from the
//! result cards. Google blocks aggressively, so this source fails often;
//! that only costs sample count.

use super::SourceSampler;
use crate::config::SamplerConfig;
use crate::error::Result;
use crate::types::{PriceObservation, SourceId};
use async_trait::async_trait;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;
use tracing::{debug, warn};

const SEARCH_URL: &str = "https://www.google.com/search";

static CARD_PRICE_RE: OnceLock<Regex> = OnceLock::new();

fn card_price_re() -> &'static Regex {
    // Price span in shopping result cards
    CARD_PRICE_RE.get_or_init(|| Regex::new(r#"a8Pemb[^>]*>([^<]+)<"#).unwrap())
}

pub struct GoogleShoppingSampler {
    http: reqwest::Client,
    config: SamplerConfig,
    source: SourceId,
}

impl GoogleShoppingSampler {
    pub fn new(config: SamplerConfig) -> Result<Self> {
        Ok(Self {
            http: super::http_client(&config)?,
            config,
            source: SourceId::new("google_shopping"),
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<Decimal>> {
        let body = self
            .http
            .get(SEARCH_URL)
            .query(&[
                ("q", format!("{query} usado precio")),
                ("tbm", "shop".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let captures = card_price_re()
            .captures_iter(&body)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str());
        Ok(super::collect_prices(captures, &self.config))
    }
}

#[async_trait]
impl SourceSampler for GoogleShoppingSampler {
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
