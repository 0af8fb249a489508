//! Configuration types for the valuation engine

use crate::model::SimulationParams;
use crate::risk::LtvLimits;
use chrono::NaiveDate;
use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationParams,
    #[serde(default)]
    pub market: MarketConfig,
    #[serde(default)]
    pub risk: LtvLimits,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Market index configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketConfig {
    /// Date the seasonal term is evaluated at (`"YYYY-MM-DD"`).
    /// Unset means the caller picks, the CLI uses today's date.
    pub as_of: Option<NaiveDate>,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl MarketConfig {
    /// Configured date, or `today` when none is set
    pub fn as_of_or(&self, today: NaiveDate) -> NaiveDate {
        self.as_of.unwrap_or(today)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
