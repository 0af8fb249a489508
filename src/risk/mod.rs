//! Risk classification
//!
//! Tiers from simulated spread, loan-to-value and the escalation rule

mod limits;
mod types;

pub use limits::{ltv_ratio, LtvLimits, DEGENERATE_LTV};
pub use types::{spread_ratio, RiskTier, RISK_THRESHOLD_HIGH, RISK_THRESHOLD_LOW};
