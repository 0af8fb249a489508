//! Telemetry module
//!
//! Logging and valuation metrics

mod logging;
mod metrics;

pub use logging::init_logging;
pub use metrics::{record_failure, record_valuation};

use crate::config::TelemetryConfig;

/// Guard that cleans up telemetry on drop
pub struct TelemetryGuard {
    _priv: (),
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, config.log_format)?;
    Ok(TelemetryGuard { _priv: () })
}
