//! CLI interface for the valuation engine
//!
//! Provides subcommands for:
//! - `appraise`: Value a single property
//! - `batch`: Value a JSON array of properties concurrently
//! - `regions`: Show the regional pricing table
//! - `config`: Show the effective configuration

mod appraise;
mod batch;
mod regions;

pub use appraise::{AppraiseArgs, OutputFormat};
pub use batch::{run_batch, BatchArgs, BatchItem};
pub use regions::format_regions;

use crate::config::Config;
use crate::telemetry::{record_failure, record_valuation};
use crate::valuation::{ValuationError, ValuationInput, ValuationResult, Valuator};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "valuate")]
#[command(about = "Property valuation with Monte Carlo confidence ranges")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Value a single property
    Appraise(AppraiseArgs),
    /// Value a JSON array of properties
    Batch(BatchArgs),
    /// Show the regional pricing table
    Regions,
    /// Show the effective configuration
    Config,
}

/// Build a valuator from configuration.
///
/// The market date comes from `market.as_of`, or today when unset. A seed
/// passed on the command line replaces the configured one.
pub fn build_valuator(config: &Config, seed: Option<u64>) -> Valuator {
    let as_of = config.market.as_of_or(Utc::now().date_naive());
    let mut config = config.clone();
    if let Some(seed) = seed {
        config.simulation = config.simulation.with_seed(seed);
    }

    let valuator = Valuator::from_config(&config, as_of);
    let params = valuator.simulator().params();
    tracing::info!(
        as_of = %valuator.market().as_of(),
        seed = params.seed,
        paths = params.paths,
        steps = params.steps,
        "Valuator ready"
    );

    valuator
}

/// Validate at the boundary, then valuate, recording metrics either way
pub fn valuate_checked(
    valuator: &Valuator,
    input: &ValuationInput,
) -> Result<ValuationResult, ValuationError> {
    let started = Instant::now();
    let outcome = input
        .validate()
        .map_err(ValuationError::from)
        .and_then(|_| valuator.valuate(input));

    match &outcome {
        Ok(result) => record_valuation(result, started.elapsed()),
        Err(e) => {
            tracing::warn!(region = %input.region, error = %e, "Valuation rejected");
            record_failure(e);
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input() -> ValuationInput {
        ValuationInput {
            area_ping: 25.0,
            property_age: 4,
            building_type: "華廈".to_string(),
            floor: 5,
            has_parking: false,
            layout: "2房1廳".to_string(),
            region: "新北市".to_string(),
            loan_amount: dec!(6000000),
        }
    }

    #[test]
    fn test_cli_parses_appraise_flags() {
        let cli = Cli::parse_from([
            "valuate",
            "appraise",
            "--area",
            "30",
            "--age",
            "10",
            "--building-type",
            "大樓",
            "--floor",
            "8",
            "--layout",
            "3房2廳",
            "--region",
            "台北市",
            "--loan",
            "8000000",
            "--format",
            "json",
        ]);
        assert_eq!(cli.config, "config.toml");
        match cli.command {
            Commands::Appraise(args) => {
                assert_eq!(args.area, Some(30.0));
                assert_eq!(args.loan, Some(dec!(8000000)));
                assert!(!args.parking);
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_seed_override() {
        let config = Config::default();
        let valuator = build_valuator(&config, Some(7));
        assert_eq!(valuator.simulator().params().seed, 7);
        let valuator = build_valuator(&config, None);
        assert_eq!(valuator.simulator().params().seed, 42);
    }

    #[test]
    fn test_configured_market_date_reaches_model() {
        let mut config = Config::default();
        let fixed = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        config.market.as_of = Some(fixed);
        let valuator = build_valuator(&config, Some(11));
        assert_eq!(valuator.market().as_of(), fixed);
        assert_eq!(valuator.simulator().params().seed, 11);
        assert_eq!(valuator.simulator().params().paths, config.simulation.paths);
    }

    #[test]
    fn test_valuate_checked_rejects_invalid_input() {
        let valuator = build_valuator(&Config::default(), None);
        let mut bad = input();
        bad.floor = 120;
        let err = valuate_checked(&valuator, &bad).unwrap_err();
        assert!(matches!(err, ValuationError::InvalidInput(_)));
    }

    #[test]
    fn test_valuate_checked_accepts_valid_input() {
        let valuator = build_valuator(&Config::default(), None);
        let result = valuate_checked(&valuator, &input()).unwrap();
        assert_eq!(result.estimated_value, result.confidence_interval.p50);
    }
}
