//! property-valuation: property value estimates with risk-scored confidence ranges
//!
//! This library provides the core components for:
//! - Base-value pricing from regional and structural coefficient tables
//! - Market index adjustment (placeholder for a sequence-model forecast)
//! - Sentiment adjustment (placeholder for a trained classifier)
//! - GBM Monte Carlo confidence intervals and risk tiers
//! - Loan-to-value checks with risk escalation
//! - CLI, configuration and observability around the pipeline

pub mod cli;
pub mod config;
pub mod model;
pub mod money;
pub mod pricing;
pub mod risk;
pub mod telemetry;
pub mod valuation;
