//! Risk tier classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spread below this is low risk
pub const RISK_THRESHOLD_LOW: f64 = 0.15;

/// Spread below this (and at least the low threshold) is medium risk
pub const RISK_THRESHOLD_HIGH: f64 = 0.30;

/// Risk tier of a valuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Classify a relative confidence-interval width.
    ///
    /// The first `<` threshold that holds wins, so a spread exactly on a
    /// boundary lands in the higher tier.
    pub fn from_spread(spread: f64) -> Self {
        if spread < RISK_THRESHOLD_LOW {
            RiskTier::Low
        } else if spread < RISK_THRESHOLD_HIGH {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    /// Label used in lending reports (低風險 / 中風險 / 高風險)
    pub fn report_label(self) -> &'static str {
        match self {
            RiskTier::Low => "低風險",
            RiskTier::Medium => "中風險",
            RiskTier::High => "高風險",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Relative spread `(p95 − p5) / p50`, zero when `p50` is not positive
pub fn spread_ratio(p5: f64, p50: f64, p95: f64) -> f64 {
    if p50 > 0.0 {
        (p95 - p5) / p50
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_spread() {
        assert_eq!(RiskTier::from_spread(0.0), RiskTier::Low);
        assert_eq!(RiskTier::from_spread(0.1499), RiskTier::Low);
        assert_eq!(RiskTier::from_spread(0.2999), RiskTier::Medium);
        assert_eq!(RiskTier::from_spread(0.75), RiskTier::High);
    }

    #[test]
    fn test_boundaries_resolve_to_higher_tier() {
        assert_eq!(RiskTier::from_spread(RISK_THRESHOLD_LOW), RiskTier::Medium);
        assert_eq!(RiskTier::from_spread(RISK_THRESHOLD_HIGH), RiskTier::High);
    }

    #[test]
    fn test_spread_ratio_guards_zero_median() {
        assert_eq!(spread_ratio(1.0, 0.0, 2.0), 0.0);
        assert_eq!(spread_ratio(1.0, -5.0, 2.0), 0.0);
        assert_eq!(spread_ratio(90.0, 100.0, 110.0), 0.2);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(RiskTier::Low < RiskTier::Medium);
        assert!(RiskTier::Medium < RiskTier::High);
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RiskTier::Medium).unwrap(), "\"medium\"");
        assert_eq!(RiskTier::High.to_string(), "high");
        assert_eq!(RiskTier::Low.report_label(), "低風險");
    }
}
