//! Appraise command implementation

use super::{build_valuator, valuate_checked};
use crate::config::Config;
use crate::valuation::ValuationInput;
use anyhow::Context;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Output format for a single valuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Args, Debug)]
pub struct AppraiseArgs {
    /// JSON file holding one valuation request (replaces the property flags)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Floor area in ping
    #[arg(long)]
    pub area: Option<f64>,

    /// Property age in years
    #[arg(long)]
    pub age: Option<i32>,

    /// Building type: 大樓, 華廈, 公寓, 透天 or 別墅
    #[arg(long)]
    pub building_type: Option<String>,

    /// Floor number
    #[arg(long)]
    pub floor: Option<i32>,

    /// Layout, e.g. 3房2廳
    #[arg(long)]
    pub layout: Option<String>,

    /// County or city, e.g. 台北市
    #[arg(long)]
    pub region: Option<String>,

    /// Property includes a parking space
    #[arg(long)]
    pub parking: bool,

    /// Requested loan amount
    #[arg(long)]
    pub loan: Option<Decimal>,

    /// Simulation seed (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl AppraiseArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let input = self.to_input()?;
        let valuator = build_valuator(config, self.seed);

        let result = valuate_checked(&valuator, &input)?;
        tracing::info!(
            estimated = %result.estimated_value,
            risk = %result.risk_level,
            "Valuation complete"
        );

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            OutputFormat::Table => print!("{}", result.format_table()),
        }
        Ok(())
    }

    /// Build the request from `--input` or from the individual flags
    pub fn to_input(&self) -> anyhow::Result<ValuationInput> {
        if let Some(path) = &self.input {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            return serde_json::from_str(&content)
                .with_context(|| format!("Invalid valuation request in {}", path.display()));
        }

        Ok(ValuationInput {
            area_ping: required(self.area, "--area")?,
            property_age: required(self.age, "--age")?,
            building_type: required(self.building_type.clone(), "--building-type")?,
            floor: required(self.floor, "--floor")?,
            has_parking: self.parking,
            layout: required(self.layout.clone(), "--layout")?,
            region: required(self.region.clone(), "--region")?,
            loan_amount: required(self.loan, "--loan")?,
        })
    }
}

fn required<T>(value: Option<T>, flag: &str) -> anyhow::Result<T> {
    value.ok_or_else(|| anyhow::anyhow!("Missing {} (or pass --input)", flag))
}
