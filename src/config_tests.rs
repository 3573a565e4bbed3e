//! Tests for configuration

#[cfg(test)]
mod tests {
    use super::super::config::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_sampler_config_default() {
        let config = SamplerConfig::default();
        assert_eq!(config.timeout_secs, 12);
        assert_eq!(config.max_results_per_source, 5);
        assert_eq!(config.min_price, dec!(100));
        assert_eq!(config.max_price, dec!(100000));
    }

    #[test]
    fn test_aggregator_config_default() {
        let config = AggregatorConfig::default();
        assert_eq!(config.medium_samples, 2);
        assert_eq!(config.high_samples, 5);
        assert_eq!(config.dedup_tolerance, dec!(0.005));
        assert_eq!(config.heavyweight_concurrency, 2);
    }

    #[test]
    fn test_scorer_config_default() {
        let config = ScorerConfig::default();
        assert_eq!(config.min_profit_ratio, dec!(0.10));
    }

    #[test]
    fn test_classifier_config_default() {
        let config = ClassifierConfig::default();
        assert_eq!(config.good_pct, dec!(20));
        assert_eq!(config.excellent_pct, dec!(50));
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.scorer.min_profit_ratio, dec!(0.10));
        assert_eq!(config.aggregator.high_samples, 5);
        assert!(config.telegram.is_none());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let toml_str = r#"
[scorer]
min_profit_ratio = 0.15

[classifier]
excellent_pct = 40
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scorer.min_profit_ratio, dec!(0.15));
        assert_eq!(config.classifier.excellent_pct, dec!(40));
        // Untouched sections keep their defaults
        assert_eq!(config.classifier.good_pct, dec!(20));
        assert_eq!(config.sampler.timeout_secs, 12);
    }

    #[test]
    fn test_telegram_section() {
        let toml_str = r#"
[telegram]
bot_token = "123:abc"
chat_id = "-100200"
high_priority_chat_id = "-100300"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let tg = config.telegram.unwrap();
        assert_eq!(tg.bot_token, "123:abc");
        assert_eq!(tg.chat_id, "-100200");
        assert_eq!(tg.high_priority_chat_id.as_deref(), Some("-100300"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "[aggregator]\nmedium_samples = 3\nhigh_samples = 7\n"
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.aggregator.medium_samples, 3);
        assert_eq!(config.aggregator.high_samples, 7);
        assert_eq!(config.scorer.min_profit_ratio, dec!(0.10));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/resale-radar-config.toml").unwrap();
        assert_eq!(config.classifier.excellent_pct, dec!(50));
    }
}
