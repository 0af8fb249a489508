//! Valuation metrics
//!
//! Recorded through the `metrics` facade; nothing is exported unless the
//! embedding application installs a recorder.

use crate::valuation::{ValuationError, ValuationResult};
use std::time::Duration;

const VALUATIONS_TOTAL: &str = "valuation_completed_total";
const ESCALATIONS_TOTAL: &str = "valuation_ltv_escalations_total";
const FAILURES_TOTAL: &str = "valuation_failures_total";
const LATENCY_MS: &str = "valuation_latency_ms";
const LTV_RATIO: &str = "valuation_ltv_ratio";

/// Record a completed valuation
pub fn record_valuation(result: &ValuationResult, elapsed: Duration) {
    metrics::counter!(VALUATIONS_TOTAL, "risk_level" => result.risk_level.as_str()).increment(1);
    if result.risk_escalated {
        metrics::counter!(ESCALATIONS_TOTAL).increment(1);
    }
    metrics::histogram!(LATENCY_MS).record(elapsed.as_secs_f64() * 1000.0);
    metrics::histogram!(LTV_RATIO).record(crate::money::to_f64(result.ltv_ratio));

    tracing::debug!(
        metric = LATENCY_MS,
        value_ms = elapsed.as_millis(),
        "Recording latency"
    );
}

/// Record a rejected or failed valuation
pub fn record_failure(error: &ValuationError) {
    let reason = match error {
        ValuationError::InvalidInput(_) => "invalid_input",
        ValuationError::ComputationFailed(_) => "computation_failed",
    };
    metrics::counter!(FAILURES_TOTAL, "reason" => reason).increment(1);
}
