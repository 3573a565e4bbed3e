//! Price sources
//!
//! Each sampler queries one external marketplace for a product and returns
//! raw price observations. Samplers are independently unreliable: any
//! network error, parse failure, or source-side block results in an empty
//! list and a warning log, never an error past the sampler boundary.

mod ebay;
mod google_shopping;
mod mercadolibre;
#[cfg(test)]
mod tests;

pub use ebay::EbaySoldSampler;
pub use google_shopping::GoogleShoppingSampler;
pub use mercadolibre::MercadoLibreApiSampler;

use crate::config::SamplerConfig;
use crate::types::{PriceObservation, SourceId};
use async_trait::async_trait;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

/// Capability every price source satisfies. The aggregator depends only on
/// this signature, never on a concrete source.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SourceSampler: Send + Sync {
    /// Best-effort observations for a free-text product query, within the
    /// sampler's own time budget. Must not fail: absence of data is an
    /// empty list.
    async fn sample(&self, query: &str) -> Vec<PriceObservation>;

    /// Source identity, for attribution and logging
    fn id(&self) -> SourceId;

    /// Heavyweight sources (full search-page fetches) are capped by the
    /// aggregator's concurrency limiter; lightweight JSON APIs are not.
    fn heavyweight(&self) -> bool {
        false
    }
}

static PRICE_RE: OnceLock<Regex> = OnceLock::new();

fn price_re() -> &'static Regex {
    // First run of digits, allowing thousands separators and a decimal part
    PRICE_RE.get_or_init(|| Regex::new(r"\d+(?:,\d{3})*(?:\.\d+)?").unwrap())
}

/// Extract a numeric price from marketplace text like `"MX$ 2,500.00"`.
///
/// Strips currency symbols and thousands separators; returns `None` for
/// text with no usable number.
pub fn parse_price_text(text: &str) -> Option<Decimal> {
    let m = price_re().find(text)?;
    Decimal::from_str(&m.as_str().replace(',', "")).ok()
}

/// Whether a parsed value is inside the sane-price band. Values outside
/// are discarded at capture time, before they ever reach the aggregator.
pub fn in_price_bounds(value: Decimal, config: &SamplerConfig) -> bool {
    value >= config.min_price && value <= config.max_price
}

/// Parse every price-bearing capture in `texts`, keeping only in-bounds
/// values, capped at the per-source result limit.
pub(crate) fn collect_prices<'a, I>(texts: I, config: &SamplerConfig) -> Vec<Decimal>
where
    I: IntoIterator<Item = &'a str>,
{
    texts
        .into_iter()
        .filter_map(parse_price_text)
        .filter(|v| in_price_bounds(*v, config))
        .take(config.max_results_per_source)
        .collect()
}

/// Wrap in-bounds values as observations attributed to `source`.
pub(crate) fn to_observations(source: &SourceId, values: Vec<Decimal>) -> Vec<PriceObservation> {
    values
        .into_iter()
        .map(|v| PriceObservation::new(source.clone(), v))
        .collect()
}

const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/121.0",
];

/// Rotating user agent, matching what the marketplaces expect from a browser
pub(crate) fn pick_user_agent() -> &'static str {
    use rand::seq::IndexedRandom;
    USER_AGENTS.choose(&mut rand::rng()).copied().unwrap_or(USER_AGENTS[0])
}

/// HTTP client with the per-source time budget applied to every request
pub(crate) fn http_client(config: &SamplerConfig) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(pick_user_agent())
        .build()
}
