//! Tests for core types

#[cfg(test)]
mod tests {
    use super::super::types::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_confidence_serialization() {
        assert_eq!(serde_json::to_string(&Confidence::Low).unwrap(), "\"low\"");
        assert_eq!(
            serde_json::to_string(&Confidence::Medium).unwrap(),
            "\"medium\""
        );
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"high\"");
    }

    #[test]
    fn test_confidence_ordering() {
        assert!(Confidence::Low < Confidence::Medium);
        assert!(Confidence::Medium < Confidence::High);
    }

    #[test]
    fn test_deal_tier_serialization() {
        assert_eq!(serde_json::to_string(&DealTier::None).unwrap(), "\"none\"");
        assert_eq!(serde_json::to_string(&DealTier::Good).unwrap(), "\"good\"");
        assert_eq!(
            serde_json::to_string(&DealTier::Excellent).unwrap(),
            "\"excellent\""
        );
    }

    #[test]
    fn test_deal_tier_display() {
        assert_eq!(DealTier::Excellent.to_string(), "excellent");
        assert_eq!(DealTier::Good.to_string(), "good");
        assert_eq!(DealTier::None.to_string(), "none");
    }

    #[test]
    fn test_source_id_display_and_eq() {
        let a = SourceId::new("ebay");
        let b = SourceId::from("ebay");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "ebay");
        assert_eq!(a.as_str(), "ebay");
    }

    #[test]
    fn test_empty_estimate_is_zero_valued() {
        let estimate = ResaleEstimate::empty("PlayStation 5");
        assert_eq!(estimate.product_query, "PlayStation 5");
        assert!(!estimate.has_samples());
        assert_eq!(estimate.sample_count(), 0);
        assert_eq!(estimate.mean, Decimal::ZERO);
        assert_eq!(estimate.range.min, Decimal::ZERO);
        assert_eq!(estimate.range.max, Decimal::ZERO);
        assert_eq!(estimate.confidence, Confidence::Low);
    }

    #[test]
    fn test_price_range_display() {
        let range = PriceRange {
            min: dec!(3000),
            max: dec!(3400),
        };
        assert_eq!(range.to_string(), "$3000 - $3400");
    }

    #[test]
    fn test_observation_carries_source() {
        let obs = PriceObservation::new(SourceId::new("mercadolibre_usado"), dec!(2500));
        assert_eq!(obs.source.as_str(), "mercadolibre_usado");
        assert_eq!(obs.value, dec!(2500));
    }

    #[test]
    fn test_verdict_serializes_to_flat_record() {
        let verdict = OpportunityVerdict {
            is_good_deal: true,
            profit_amount: dec!(1200),
            profit_ratio: dec!(0.60),
            confidence: Confidence::Medium,
            reasoning: "test".to_string(),
        };
        let json: serde_json::Value = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["is_good_deal"], true);
        assert_eq!(json["confidence"], "medium");
        assert!(json["profit_amount"].is_string() || json["profit_amount"].is_number());
        // Flat record: no nested objects
        assert!(json.as_object().unwrap().values().all(|v| !v.is_object()));
    }

    #[test]
    fn test_estimate_roundtrip() {
        let estimate = ResaleEstimate {
            product_query: "AirPods Pro".to_string(),
            samples: vec![PriceObservation::new(SourceId::new("ebay"), dec!(4000))],
            mean: dec!(4000),
            range: PriceRange {
                min: dec!(4000),
                max: dec!(4000),
            },
            confidence: Confidence::Low,
        };
        let json = serde_json::to_string(&estimate).unwrap();
        let back: ResaleEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, estimate);
    }
}
