//! Unit tests for price extraction and sampler helpers

use super::*;
use rust_decimal_macros::dec;

fn test_config() -> SamplerConfig {
    SamplerConfig::default()
}

#[test]
fn test_parse_plain_number() {
    assert_eq!(parse_price_text("2500"), Some(dec!(2500)));
}

#[test]
fn test_parse_currency_symbol() {
    assert_eq!(parse_price_text("$1,299"), Some(dec!(1299)));
}

#[test]
fn test_parse_mexican_format() {
    assert_eq!(parse_price_text("MX$ 2,500.00"), Some(dec!(2500.00)));
}

#[test]
fn test_parse_decimal_part() {
    assert_eq!(parse_price_text("$999.99"), Some(dec!(999.99)));
}

#[test]
fn test_parse_with_surrounding_text() {
    assert_eq!(parse_price_text("Precio: $4,500 MXN"), Some(dec!(4500)));
}

#[test]
fn test_parse_no_number() {
    assert_eq!(parse_price_text("Consultar precio"), None);
    assert_eq!(parse_price_text(""), None);
}

#[test]
fn test_bounds_filter() {
    let config = test_config();
    assert!(in_price_bounds(dec!(100), &config));
    assert!(in_price_bounds(dec!(100000), &config));
    assert!(!in_price_bounds(dec!(99), &config));
    assert!(!in_price_bounds(dec!(100001), &config));
    assert!(!in_price_bounds(dec!(5), &config));
}

#[test]
fn test_collect_prices_filters_and_caps() {
    let config = test_config();
    let texts = vec![
        "$50",        // below band, dropped
        "$3,000",
        "garbage",    // unparseable, dropped
        "$3,200",
        "$3,400",
        "$500,000",   // above band, dropped
        "$4,000",
        "$4,100",
        "$4,200",     // beyond the per-source cap of 5
    ];
    let prices = collect_prices(texts, &config);
    assert_eq!(
        prices,
        vec![dec!(3000), dec!(3200), dec!(3400), dec!(4000), dec!(4100)]
    );
}

#[test]
fn test_to_observations_attributes_source() {
    let source = SourceId::new("ebay");
    let obs = to_observations(&source, vec![dec!(3000), dec!(3200)]);
    assert_eq!(obs.len(), 2);
    assert!(obs.iter().all(|o| o.source == source));
    assert_eq!(obs[0].value, dec!(3000));
}

#[test]
fn test_user_agent_pool() {
    let ua = pick_user_agent();
    assert!(ua.starts_with("Mozilla/5.0"));
}

#[test]
fn test_samplers_construct_with_defaults() {
    let config = test_config();
    assert!(MercadoLibreApiSampler::new(config.clone()).is_ok());
    let ebay = EbaySoldSampler::new(config.clone()).unwrap();
    assert_eq!(ebay.id().as_str(), "ebay");
    assert!(ebay.heavyweight());
    let google = GoogleShoppingSampler::new(config).unwrap();
    assert!(google.heavyweight());
}
