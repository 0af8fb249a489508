//! Valuation models
//!
//! The market index and sentiment stages sit behind traits so the closed-form
//! placeholders can be replaced by trained models without touching the
//! orchestrator. The GBM simulator is concrete.

mod gbm;
mod market_index;
mod sentiment;

pub use gbm::{
    percentile, simulate, terminal_values, ConfidenceInterval, GbmSimulator, SimulationError,
    SimulationOutcome, SimulationParams,
};
pub use market_index::TrendIndexModel;
pub use sentiment::{age_sentiment, sentiment_multiplier, SlopeSentimentModel};

use crate::money::AmountError;
use rust_decimal::Decimal;

/// Output of the market index stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketAdjustment {
    /// Base value rescaled by the market index, whole currency units
    pub adjusted_value: Decimal,
    /// Synthetic regional price-trend index
    pub market_index: f64,
}

/// Output of the sentiment stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentAdjustment {
    /// Value after the tiered sentiment adjustment, whole currency units
    pub adjusted_value: Decimal,
    /// Composite sentiment in [-1, 1]
    pub sentiment_score: f64,
}

/// Trait for market index implementations.
///
/// Implementations must return a strictly positive value for a positive
/// input, proportional to `base_value` for a fixed region.
pub trait MarketIndexModel: Send + Sync {
    /// Rescale a base value by the region's market index
    fn adjust_by_market_index(
        &self,
        region: &str,
        base_value: Decimal,
    ) -> Result<MarketAdjustment, AmountError>;

    /// Whether this is a closed-form stand-in rather than a trained model
    fn is_placeholder(&self) -> bool {
        false
    }
}

/// Trait for sentiment implementations.
///
/// The score must stay within [-1, 1] and a positive input must yield a
/// positive adjusted value.
pub trait SentimentModel: Send + Sync {
    /// Score sentiment for the property and adjust the value accordingly
    fn adjust_by_sentiment(
        &self,
        region: &str,
        building_type: &str,
        age: i32,
        input_value: Decimal,
    ) -> Result<SentimentAdjustment, AmountError>;

    /// Whether this is a closed-form stand-in rather than a trained model
    fn is_placeholder(&self) -> bool {
        false
    }
}
