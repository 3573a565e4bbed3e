//! Configuration
//!
//! All thresholds live here instead of being read from the environment at
//! the point of use. Every section has documented defaults so the bot runs
//! with no config file at all; a TOML file and `RADAR_`-prefixed env vars
//! can override any field.

use crate::error::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub sampler: SamplerConfig,
    pub aggregator: AggregatorConfig,
    pub scorer: ScorerConfig,
    pub classifier: ClassifierConfig,
    pub telegram: Option<TelegramConfig>,
}

/// Settings shared by all source samplers
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Per-source time budget in seconds
    pub timeout_secs: u64,
    /// Cap on observations taken from a single source
    pub max_results_per_source: usize,
    /// Observations below this are discarded as not-a-real-price
    pub min_price: Decimal,
    /// Observations above this are discarded as absurd
    pub max_price: Decimal,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 12,
            max_results_per_source: 5,
            min_price: dec!(100),
            max_price: dec!(100000),
        }
    }
}

/// Aggregation thresholds
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Sample count at which confidence becomes medium
    pub medium_samples: usize,
    /// Sample count at which confidence becomes high
    pub high_samples: usize,
    /// Relative tolerance for collapsing near-equal observations from the
    /// same source (0.005 = 0.5%). Equal prices from different sources are
    /// kept: independent listings at the same price corroborate each other.
    pub dedup_tolerance: Decimal,
    /// Max heavyweight samplers in flight at once
    pub heavyweight_concurrency: usize,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            medium_samples: 2,
            high_samples: 5,
            dedup_tolerance: dec!(0.005),
            heavyweight_concurrency: 2,
        }
    }
}

/// Opportunity scoring thresholds
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Minimum profit ratio for a deal to be flagged good (0.10 = 10%)
    pub min_profit_ratio: Decimal,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            min_profit_ratio: dec!(0.10),
        }
    }
}

/// Deal tier cutoffs, in percent
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Lower bound (inclusive) of the `good` tier
    pub good_pct: Decimal,
    /// Lower bound (inclusive) of the `excellent` tier
    pub excellent_pct: Decimal,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            good_pct: dec!(20),
            excellent_pct: dec!(50),
        }
    }
}

/// Telegram notification settings
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Chat for `good` deals
    pub chat_id: String,
    /// Optional separate chat for `excellent` deals; falls back to `chat_id`
    pub high_priority_chat_id: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file (optional) plus environment
    /// overrides (`RADAR_SCORER__MIN_PROFIT_RATIO=0.15` etc).
    pub fn load(path: &str) -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = shellexpand::tilde(path).to_string();
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&path).required(false))
            .add_source(config::Environment::with_prefix("RADAR").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
