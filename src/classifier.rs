//! Deal tier classification
//!
//! Pure total function over discount percentages, used to route
//! notifications. Boundaries are inclusive on the lower bound of each tier:
//! exactly 50% is excellent, exactly 20% is good. Negative input is `none`.

use crate::config::ClassifierConfig;
use crate::types::DealTier;
use rust_decimal::Decimal;

pub struct DealClassifier {
    config: ClassifierConfig,
}

impl DealClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, discount_pct: Decimal) -> DealTier {
        if discount_pct >= self.config.excellent_pct {
            DealTier::Excellent
        } else if discount_pct >= self.config.good_pct {
            DealTier::Good
        } else {
            DealTier::None
        }
    }
}
