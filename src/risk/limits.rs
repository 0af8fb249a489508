//! Loan-to-value limits and risk escalation

use super::RiskTier;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// LTV reported when the estimated value is not positive
pub const DEGENERATE_LTV: Decimal = dec!(1.0);

/// Loan-to-value limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LtvLimits {
    /// LTV above which a low-risk valuation is escalated to medium
    pub escalation_threshold: Decimal,
}

impl Default for LtvLimits {
    fn default() -> Self {
        Self {
            escalation_threshold: dec!(0.80),
        }
    }
}

impl LtvLimits {
    /// Create limits with a custom escalation threshold
    pub fn new(escalation_threshold: Decimal) -> Self {
        Self {
            escalation_threshold,
        }
    }

    /// Apply the LTV escalation rule.
    ///
    /// Only ever moves low to medium. Medium and high are returned unchanged.
    pub fn escalate(&self, tier: RiskTier, ltv: Decimal) -> RiskTier {
        if tier == RiskTier::Low && ltv > self.escalation_threshold {
            RiskTier::Medium
        } else {
            tier
        }
    }
}

/// Loan-to-value ratio rounded to 4 decimals
pub fn ltv_ratio(loan_amount: Decimal, estimated_value: Decimal) -> Decimal {
    if estimated_value <= Decimal::ZERO {
        return DEGENERATE_LTV;
    }
    (loan_amount / estimated_value).round_dp(4)
}
