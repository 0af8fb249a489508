//! Batch valuation tests

use property_valuation::cli::{build_valuator, run_batch};
use property_valuation::config::Config;
use property_valuation::valuation::ValuationInput;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn request(region: &str, floor: i32) -> ValuationInput {
    ValuationInput {
        area_ping: 28.0,
        property_age: 12,
        building_type: "大樓".to_string(),
        floor,
        has_parking: true,
        layout: "3房2廳".to_string(),
        region: region.to_string(),
        loan_amount: dec!(9000000),
    }
}

#[tokio::test]
async fn test_batch_preserves_order_and_reports_errors() {
    let valuator = Arc::new(build_valuator(&Config::default(), None));
    let inputs = vec![
        request("台北市", 8),
        request("台中市", 0),
        request("高雄市", 15),
    ];

    let items = run_batch(valuator, inputs).await.unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(
        items.iter().map(|item| item.index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );

    assert_eq!(items[0].result.as_ref().unwrap().region, "台北市");
    assert!(items[1].result.is_none());
    assert!(items[1].error.as_ref().unwrap().contains("Floor"));
    assert_eq!(items[2].result.as_ref().unwrap().region, "高雄市");
}

#[tokio::test]
async fn test_batch_matches_single_valuation() {
    let valuator = Arc::new(build_valuator(&Config::default(), None));
    let expected = valuator.valuate(&request("新竹市", 10)).unwrap();

    let inputs = vec![request("新竹市", 10); 4];
    let items = run_batch(Arc::clone(&valuator), inputs).await.unwrap();
    for item in items {
        assert_eq!(item.result.unwrap(), expected);
    }
}
