//! Property valuation
//!
//! Input and result records plus the [`Valuator`] that sequences the pricing,
//! market, sentiment and simulation stages.

mod report;
mod types;
mod valuator;

pub use types::{
    ValidationError, ValuationError, ValuationInput, ValuationMode, ValuationResult, MAX_AREA_PING,
    MAX_FLOOR, MAX_PROPERTY_AGE, MIN_FLOOR, MIN_TEXT_LEN,
};
pub use valuator::Valuator;
