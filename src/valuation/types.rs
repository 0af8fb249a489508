//! Valuation input/output records and errors

use crate::model::{ConfidenceInterval, SimulationError};
use crate::money::AmountError;
use crate::pricing::{Breakdown, BuildingType};
use crate::risk::RiskTier;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_AREA_PING: f64 = 1000.0;
pub const MAX_PROPERTY_AGE: i32 = 80;
pub const MIN_FLOOR: i32 = 1;
pub const MAX_FLOOR: i32 = 99;
/// Minimum length, in characters, of the layout and region descriptors
pub const MIN_TEXT_LEN: usize = 2;

/// Property attributes and requested loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationInput {
    /// Floor area in ping, 0 < area ≤ 1000
    pub area_ping: f64,
    /// Age in years, 0..=80
    pub property_age: i32,
    /// One of 大樓 / 華廈 / 公寓 / 透天 / 別墅
    pub building_type: String,
    /// 1..=99
    pub floor: i32,
    pub has_parking: bool,
    /// Layout descriptor such as "3房2廳"
    pub layout: String,
    /// County or city name such as "台北市"
    pub region: String,
    /// Requested loan, currency units
    pub loan_amount: Decimal,
}

impl ValuationInput {
    /// Check the caller-facing contract.
    ///
    /// The pipeline itself never calls this; it is the boundary check for
    /// callers that accept untrusted records.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.area_ping > 0.0 && self.area_ping <= MAX_AREA_PING) {
            return Err(ValidationError::Area(self.area_ping));
        }
        if !(0..=MAX_PROPERTY_AGE).contains(&self.property_age) {
            return Err(ValidationError::PropertyAge(self.property_age));
        }
        if BuildingType::lookup(&self.building_type).is_none() {
            return Err(ValidationError::BuildingType(self.building_type.clone()));
        }
        if !(MIN_FLOOR..=MAX_FLOOR).contains(&self.floor) {
            return Err(ValidationError::Floor(self.floor));
        }
        if self.layout.chars().count() < MIN_TEXT_LEN {
            return Err(ValidationError::Layout(self.layout.clone()));
        }
        if self.region.chars().count() < MIN_TEXT_LEN {
            return Err(ValidationError::Region(self.region.clone()));
        }
        if self.loan_amount <= Decimal::ZERO {
            return Err(ValidationError::LoanAmount(self.loan_amount));
        }
        Ok(())
    }
}

/// Whether the result came from placeholder stages or trained models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuationMode {
    Demo,
    Production,
}

/// Complete valuation, built once per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Median simulated value (equals `confidence_interval.p50`)
    pub estimated_value: Decimal,
    pub confidence_interval: ConfidenceInterval,
    /// loan_amount / estimated_value, 4 decimals
    pub ltv_ratio: Decimal,
    pub risk_level: RiskTier,
    /// True when the LTV rule raised the simulated tier
    pub risk_escalated: bool,
    pub market_index: f64,
    /// Composite sentiment in [-1, 1]
    pub sentiment_score: f64,
    /// Value before market and sentiment adjustment
    pub base_value: Decimal,
    pub breakdown: Breakdown,
    pub mode: ValuationMode,
    pub region: String,
    pub building_type: String,
}

/// Input contract violations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Area must be in (0, 1000] ping, got {0}")]
    Area(f64),
    #[error("Property age must be in 0..=80, got {0}")]
    PropertyAge(i32),
    #[error("Unknown building type {0:?}, expected one of 大樓, 華廈, 公寓, 透天, 別墅")]
    BuildingType(String),
    #[error("Floor must be in 1..=99, got {0}")]
    Floor(i32),
    #[error("Layout must be at least 2 characters, got {0:?}")]
    Layout(String),
    #[error("Region must be at least 2 characters, got {0:?}")]
    Region(String),
    #[error("Loan amount must be positive, got {0}")]
    LoanAmount(Decimal),
}

/// Valuation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValuationError {
    /// Rejected at the input boundary
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
    /// A stage could not produce a result; no partial output is returned
    #[error("Valuation computation failed: {0}")]
    ComputationFailed(String),
}

impl From<SimulationError> for ValuationError {
    fn from(e: SimulationError) -> Self {
        ValuationError::ComputationFailed(e.to_string())
    }
}

impl From<AmountError> for ValuationError {
    fn from(e: AmountError) -> Self {
        ValuationError::ComputationFailed(e.to_string())
    }
}
