//! Four-stage valuation pipeline
//!
//! pricing → market index → sentiment → Monte Carlo, then LTV escalation

use super::{ValuationError, ValuationInput, ValuationMode, ValuationResult};
use crate::config::Config;
use crate::model::{
    GbmSimulator, MarketIndexModel, SentimentModel, SimulationParams, SlopeSentimentModel,
    TrendIndexModel,
};
use crate::pricing::price;
use crate::risk::{ltv_ratio, LtvLimits};
use chrono::NaiveDate;

/// Runs the valuation pipeline.
///
/// Holds no mutable state, so one instance can serve concurrent requests.
pub struct Valuator<M: MarketIndexModel = TrendIndexModel, S: SentimentModel = SlopeSentimentModel> {
    market: M,
    sentiment: S,
    simulator: GbmSimulator,
    ltv_limits: LtvLimits,
}

impl Valuator {
    /// Placeholder stages with the market index evaluated at `as_of`
    pub fn new(as_of: NaiveDate, params: SimulationParams) -> Self {
        Self::with_models(
            TrendIndexModel::new(as_of),
            SlopeSentimentModel::new(),
            GbmSimulator::new(params),
            LtvLimits::default(),
        )
    }

    /// Create from configuration; `as_of` is the resolved market date
    pub fn from_config(config: &Config, as_of: NaiveDate) -> Self {
        Self::with_models(
            TrendIndexModel::new(as_of),
            SlopeSentimentModel::new(),
            GbmSimulator::new(config.simulation),
            config.risk.clone(),
        )
    }
}

impl<M: MarketIndexModel, S: SentimentModel> Valuator<M, S> {
    /// Assemble a pipeline from explicit stage implementations
    pub fn with_models(market: M, sentiment: S, simulator: GbmSimulator, ltv_limits: LtvLimits) -> Self {
        Self {
            market,
            sentiment,
            simulator,
            ltv_limits,
        }
    }

    pub fn market(&self) -> &M {
        &self.market
    }

    pub fn simulator(&self) -> &GbmSimulator {
        &self.simulator
    }

    /// `Demo` while any stage is a placeholder
    pub fn mode(&self) -> ValuationMode {
        if self.market.is_placeholder() || self.sentiment.is_placeholder() {
            ValuationMode::Demo
        } else {
            ValuationMode::Production
        }
    }

    /// Value a pre-validated input.
    ///
    /// Stages run in fixed order, each feeding its value to the next. Unknown
    /// regions, building types and layouts fall back to table defaults.
    pub fn valuate(&self, input: &ValuationInput) -> Result<ValuationResult, ValuationError> {
        let (base_value, breakdown) = price(
            &input.region,
            &input.building_type,
            input.property_age,
            input.floor,
            &input.layout,
            input.has_parking,
            input.area_ping,
        )?;

        let market = self
            .market
            .adjust_by_market_index(&input.region, base_value)?;

        let sentiment = self.sentiment.adjust_by_sentiment(
            &input.region,
            &input.building_type,
            input.property_age,
            market.adjusted_value,
        )?;

        let outcome = self.simulator.simulate(sentiment.adjusted_value)?;

        let estimated_value = outcome.interval.p50;
        let ltv = ltv_ratio(input.loan_amount, estimated_value);
        let risk_level = self.ltv_limits.escalate(outcome.risk_tier, ltv);
        let risk_escalated = risk_level != outcome.risk_tier;

        tracing::debug!(
            region = %input.region,
            base = %base_value,
            market_adjusted = %market.adjusted_value,
            sentiment_adjusted = %sentiment.adjusted_value,
            estimated = %estimated_value,
            ltv = %ltv,
            risk = %risk_level,
            risk_escalated,
            "Valuation complete"
        );

        Ok(ValuationResult {
            estimated_value,
            confidence_interval: outcome.interval,
            ltv_ratio: ltv,
            risk_level,
            risk_escalated,
            market_index: market.market_index,
            sentiment_score: sentiment.sentiment_score,
            base_value,
            breakdown,
            mode: self.mode(),
            region: input.region.clone(),
            building_type: input.building_type.clone(),
        })
    }
}
