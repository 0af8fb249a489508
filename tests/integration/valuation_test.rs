//! End-to-end valuation pipeline tests

use chrono::NaiveDate;
use property_valuation::model::{simulate, SimulationParams};
use property_valuation::pricing::{parking_premium, DEFAULT_PARKING_PREMIUM};
use property_valuation::risk::RiskTier;
use property_valuation::valuation::{ValuationInput, ValuationMode, Valuator};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::thread;

fn valuator() -> Valuator {
    Valuator::new(
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        SimulationParams::default(),
    )
}

fn reference_input() -> ValuationInput {
    ValuationInput {
        area_ping: 30.0,
        property_age: 10,
        building_type: "大樓".to_string(),
        floor: 8,
        has_parking: false,
        layout: "3房2廳".to_string(),
        region: "台北市".to_string(),
        loan_amount: dec!(8000000),
    }
}

#[test]
fn test_reference_scenario() {
    let input = reference_input();
    let result = valuator().valuate(&input).unwrap();

    let ci = result.confidence_interval;
    assert_eq!(result.estimated_value, ci.p50);
    assert!(ci.p5 < ci.p50 && ci.p50 < ci.p95);
    assert!(matches!(
        result.risk_level,
        RiskTier::Low | RiskTier::Medium | RiskTier::High
    ));

    let expected_ltv = input.loan_amount / result.estimated_value;
    assert!((result.ltv_ratio - expected_ltv).abs() < dec!(0.0001));
    assert!((-1.0..=1.0).contains(&result.sentiment_score));
    assert_eq!(result.mode, ValuationMode::Demo);
}

#[test]
fn test_high_loan_is_never_low_risk() {
    let mut input = reference_input();
    input.loan_amount = dec!(50000000);
    let result = valuator().valuate(&input).unwrap();
    assert!(result.ltv_ratio > dec!(0.80));
    assert_ne!(result.risk_level, RiskTier::Low);
}

#[test]
fn test_parking_changes_base_value_by_premium() {
    let without = valuator().valuate(&reference_input()).unwrap();
    let mut input = reference_input();
    input.has_parking = true;
    let with = valuator().valuate(&input).unwrap();
    assert_eq!(with.base_value - without.base_value, parking_premium("台北市"));

    let mut rural = reference_input();
    rural.region = "澎湖縣".to_string();
    let without = valuator().valuate(&rural).unwrap();
    rural.has_parking = true;
    let with = valuator().valuate(&rural).unwrap();
    assert_eq!(with.base_value - without.base_value, DEFAULT_PARKING_PREMIUM);
}

#[test]
fn test_breakdown_explains_base_value() {
    let result = valuator().valuate(&reference_input()).unwrap();
    let b = &result.breakdown;
    assert_eq!(result.base_value, b.main_value + b.parking_premium);
    assert_eq!(b.unit_price_per_ping, 160.0);
    assert_eq!(b.area_ping, 30.0);
}

#[test]
fn test_unknown_region_is_not_an_error() {
    let mut input = reference_input();
    input.region = "月球市".to_string();
    let result = valuator().valuate(&input).unwrap();
    assert_eq!(result.breakdown.unit_price_per_ping, 10.0);
    assert!(result.estimated_value > Decimal::ZERO);
    assert_eq!(result.region, "月球市");
}

#[test]
fn test_identical_inputs_reproduce() {
    let a = valuator().valuate(&reference_input()).unwrap();
    let b = valuator().valuate(&reference_input()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_concurrent_valuations_match_sequential() {
    let shared = Arc::new(valuator());
    let expected = shared.valuate(&reference_input()).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let valuator = Arc::clone(&shared);
            thread::spawn(move || valuator.valuate(&reference_input()).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_simulation_scales_with_spot() {
    let params = SimulationParams::default();
    for k in [dec!(2), dec!(3), dec!(10)] {
        let base = simulate(dec!(4000000), &params).unwrap();
        let scaled = simulate(dec!(4000000) * k, &params).unwrap();
        let ratio = scaled.percentiles.1 / base.percentiles.1;
        let k: f64 = k.try_into().unwrap();
        assert!((ratio - k).abs() < 1e-9);
    }
}

#[test]
fn test_market_date_changes_only_seasonal_stage() {
    let january = Valuator::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        SimulationParams::default(),
    );
    let april = Valuator::new(
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
        SimulationParams::default(),
    );
    let a = january.valuate(&reference_input()).unwrap();
    let b = april.valuate(&reference_input()).unwrap();
    assert_eq!(a.base_value, b.base_value);
    assert!(b.market_index > a.market_index);
}
