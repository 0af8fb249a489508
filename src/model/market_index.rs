//! Compounded-growth market index with seasonal modulation
//!
//! index = 100 × (1 + g)^11 × (1 + 0.03 × sin(2π × month / 12))
//! value = base × (1 + (index / 180 − 1) × 0.30)

use super::{MarketAdjustment, MarketIndexModel};
use crate::money::{round_to, to_f64, try_money, AmountError};
use crate::pricing::annual_growth;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::f64::consts::PI;

/// Index level in the base year (2014)
pub const BASE_INDEX: f64 = 100.0;

/// Years compounded from the base year
pub const YEARS_ELAPSED: i32 = 11;

/// Seasonal modulation amplitude (±3%)
pub const SEASON_AMPLITUDE: f64 = 0.03;

/// Index level treated as "no adjustment"
pub const NORMALIZATION_INDEX: f64 = 180.0;

/// Fraction of the index deviation applied to the value
pub const DAMPING: f64 = 0.30;

/// Placeholder market index model.
///
/// The seasonal term is driven by the month of an explicit `as_of` date so
/// that identical inputs always produce identical outputs.
#[derive(Debug, Clone, Copy)]
pub struct TrendIndexModel {
    as_of: NaiveDate,
}

impl TrendIndexModel {
    /// Create a model evaluated at the given date
    pub fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    /// Date the seasonal term is evaluated at
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Unrounded market index for a region
    pub fn market_index(&self, region: &str) -> f64 {
        let growth = annual_growth(region);
        let trend = BASE_INDEX * (1.0 + growth).powi(YEARS_ELAPSED);
        trend * self.season_factor()
    }

    fn season_factor(&self) -> f64 {
        let month = f64::from(self.as_of.month0());
        1.0 + SEASON_AMPLITUDE * (2.0 * PI * month / 12.0).sin()
    }
}

impl MarketIndexModel for TrendIndexModel {
    fn adjust_by_market_index(
        &self,
        region: &str,
        base_value: Decimal,
    ) -> Result<MarketAdjustment, AmountError> {
        let index = self.market_index(region);
        let index_adj = (index / NORMALIZATION_INDEX - 1.0) * DAMPING;
        let adjusted = to_f64(base_value) * (1.0 + index_adj);

        tracing::debug!(region, index, index_adj, "Applied market index");

        Ok(MarketAdjustment {
            adjusted_value: try_money("market index", adjusted)?,
            market_index: round_to(index, 2),
        })
    }

    fn is_placeholder(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{Region, DEFAULT_ANNUAL_GROWTH};
    use rust_decimal_macros::dec;

    fn model(month: u32) -> TrendIndexModel {
        TrendIndexModel::new(NaiveDate::from_ymd_opt(2025, month, 1).unwrap())
    }

    #[test]
    fn test_january_has_no_seasonal_term() {
        let m = model(1);
        let expected = BASE_INDEX * 1.045f64.powi(11);
        assert!((m.market_index("台北市") - expected).abs() < 1e-9);
    }

    #[test]
    fn test_seasonal_peak_in_april() {
        // month0 = 3 puts the sine at its maximum
        let jan = model(1).market_index("台北市");
        let apr = model(4).market_index("台北市");
        assert!((apr / jan - 1.03).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_region_uses_default_growth() {
        let m = model(1);
        let expected = BASE_INDEX * (1.0 + DEFAULT_ANNUAL_GROWTH).powi(11);
        assert!((m.market_index("火星市") - expected).abs() < 1e-9);
    }

    #[test]
    fn test_adjustment_is_positive_for_all_regions_and_months() {
        for month in 1..=12 {
            let m = model(month);
            for region in Region::ALL {
                let out = m.adjust_by_market_index(region.label(), dec!(10000000)).unwrap();
                assert!(out.adjusted_value > Decimal::ZERO);
                assert!(out.market_index > 0.0);
            }
        }
    }

    #[test]
    fn test_adjustment_is_proportional() {
        let m = model(7);
        let small = m.adjust_by_market_index("桃園市", dec!(5000000)).unwrap();
        let large = m.adjust_by_market_index("桃園市", dec!(50000000)).unwrap();
        let ratio = to_f64(large.adjusted_value) / to_f64(small.adjusted_value);
        assert!((ratio - 10.0).abs() < 1e-5);
        assert_eq!(small.market_index, large.market_index);
    }

    #[test]
    fn test_same_date_is_reproducible() {
        let a = model(9).adjust_by_market_index("高雄市", dec!(12345678)).unwrap();
        let b = model(9).adjust_by_market_index("高雄市", dec!(12345678)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_overflowing_adjustment_is_an_error() {
        // 新竹市 trends above the normalization index, so the factor exceeds 1
        let err = model(1)
            .adjust_by_market_index("新竹市", Decimal::MAX)
            .unwrap_err();
        assert_eq!(err.stage, "market index");
    }

    #[test]
    fn test_is_placeholder() {
        assert!(model(1).is_placeholder());
    }
}
