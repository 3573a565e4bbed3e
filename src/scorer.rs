//! Opportunity scoring
//!
//! Decides whether a listing price is a profitable resale opportunity
//! relative to an aggregated estimate. The only hard failure is invalid
//! caller input; an estimate with no data produces a well-defined negative
//! verdict.

use crate::config::ScorerConfig;
use crate::error::{RadarError, Result};
use crate::types::{Confidence, OpportunityVerdict, ResaleEstimate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub struct OpportunityScorer {
    config: ScorerConfig,
}

impl OpportunityScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Score one `(current_price, estimate)` pair.
    ///
    /// A deal is flagged good only when profit is positive, the profit
    /// ratio clears the configured threshold, and confidence is at least
    /// medium. Zero verified samples can never be a good deal, whatever
    /// the nominal discount.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `current_price <= 0`; the ratio would be
    /// undefined, so the input is rejected rather than treated as 0%.
    pub fn score(
        &self,
        current_price: Decimal,
        estimate: &ResaleEstimate,
    ) -> Result<OpportunityVerdict> {
        if current_price <= Decimal::ZERO {
            return Err(RadarError::InvalidInput(format!(
                "current price must be positive, got {current_price}"
            )));
        }

        if !estimate.has_samples() {
            return Ok(OpportunityVerdict {
                is_good_deal: false,
                profit_amount: Decimal::ZERO,
                profit_ratio: Decimal::ZERO,
                confidence: Confidence::Low,
                reasoning: "no resale prices found from any source".to_string(),
            });
        }

        let profit_amount = estimate.mean - current_price;
        let profit_ratio = profit_amount / current_price;

        let is_good_deal = profit_amount > Decimal::ZERO
            && profit_ratio > self.config.min_profit_ratio
            && estimate.confidence != Confidence::Low;

        let reasoning = format!(
            "current price ${current_price}, average resale ${}, potential profit ${profit_amount} ({:.1}%), {} samples at {} confidence",
            estimate.mean,
            profit_ratio * dec!(100),
            estimate.sample_count(),
            estimate.confidence,
        );

        Ok(OpportunityVerdict {
            is_good_deal,
            profit_amount,
            profit_ratio,
            confidence: estimate.confidence,
            reasoning,
        })
    }
}
