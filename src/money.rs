//! Conversions between `f64` model math and `Decimal` currency amounts

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use thiserror::Error;

/// A computed amount that has no currency representation
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{stage} produced an unrepresentable amount: {value}")]
pub struct AmountError {
    pub stage: &'static str,
    pub value: f64,
}

/// Round an `f64` amount to whole currency units.
///
/// Returns `None` for non-finite or out-of-range values.
pub fn to_money(value: f64) -> Option<Decimal> {
    Decimal::try_from(value).ok().map(|d| d.round_dp(0))
}

/// Like [`to_money`], attributing a failure to `stage`
pub fn try_money(stage: &'static str, value: f64) -> Result<Decimal, AmountError> {
    to_money(value).ok_or(AmountError { stage, value })
}

/// Decimal amount as `f64` for numerical work
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Round an `f64` to a fixed number of decimals
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_money_rounds() {
        assert_eq!(to_money(1234.4), Some(dec!(1234)));
        assert_eq!(to_money(1234.6), Some(dec!(1235)));
    }

    #[test]
    fn test_to_money_rejects_non_finite() {
        assert_eq!(to_money(f64::NAN), None);
        assert_eq!(to_money(f64::INFINITY), None);
    }

    #[test]
    fn test_try_money_names_stage() {
        assert_eq!(try_money("pricing", 99.5), Ok(dec!(100)));
        let err = try_money("pricing", 1e30).unwrap_err();
        assert_eq!(err.stage, "pricing");
        assert!(err.to_string().starts_with("pricing produced"));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456, 4), 0.1235);
        assert_eq!(round_to(171.004, 2), 171.0);
    }
}
