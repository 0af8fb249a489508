//! Momentum, demand and age sentiment

use super::{SentimentAdjustment, SentimentModel};
use crate::money::{round_to, to_f64, try_money, AmountError};
use crate::pricing::{annual_growth, demand_factor};
use rust_decimal::Decimal;

/// Months compounded from the base year
const MONTHS_ELAPSED: i32 = 11 * 12;

/// Trailing window for the momentum slope, in months
const SLOPE_WINDOW: i32 = 3;

/// Scores above this are bullish
pub const BULLISH_THRESHOLD: f64 = 0.15;

/// Scores below this are bearish
pub const BEARISH_THRESHOLD: f64 = -0.15;

const BULLISH_MULTIPLIER: f64 = 1.03;
const BEARISH_MULTIPLIER: f64 = 0.95;

/// Placeholder sentiment model built from closed-form terms
#[derive(Debug, Clone, Copy, Default)]
pub struct SlopeSentimentModel;

impl SlopeSentimentModel {
    pub fn new() -> Self {
        Self
    }

    /// Relative index change over the trailing window
    pub fn momentum(&self, region: &str) -> f64 {
        let monthly_rate = annual_growth(region) / 12.0;
        let current = (1.0 + monthly_rate).powi(MONTHS_ELAPSED);
        let previous = (1.0 + monthly_rate).powi(MONTHS_ELAPSED - SLOPE_WINDOW);
        (current - previous) / previous
    }

    /// Unrounded composite score clamped to [-1, 1]
    pub fn score(&self, region: &str, building_type: &str, age: i32) -> f64 {
        let raw = self.momentum(region) + demand_factor(building_type) + age_sentiment(age);
        raw.clamp(-1.0, 1.0)
    }
}

impl SentimentModel for SlopeSentimentModel {
    fn adjust_by_sentiment(
        &self,
        region: &str,
        building_type: &str,
        age: i32,
        input_value: Decimal,
    ) -> Result<SentimentAdjustment, AmountError> {
        let score = self.score(region, building_type, age);
        let multiplier = sentiment_multiplier(score);
        let adjusted = to_f64(input_value) * multiplier;

        tracing::debug!(region, building_type, score, multiplier, "Applied sentiment");

        Ok(SentimentAdjustment {
            adjusted_value: try_money("sentiment", adjusted)?,
            sentiment_score: round_to(score, 4),
        })
    }

    fn is_placeholder(&self) -> bool {
        true
    }
}

/// Age term: newer properties sell more readily
pub fn age_sentiment(age: i32) -> f64 {
    if age <= 5 {
        0.08
    } else if age <= 15 {
        0.03
    } else if age <= 30 {
        -0.05
    } else {
        -0.12
    }
}

/// Tiered value multiplier. The neutral band [-0.15, 0.15] is closed.
pub fn sentiment_multiplier(score: f64) -> f64 {
    if score > BULLISH_THRESHOLD {
        BULLISH_MULTIPLIER
    } else if score < BEARISH_THRESHOLD {
        BEARISH_MULTIPLIER
    } else {
        1.00
    }
}
