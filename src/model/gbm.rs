//! Geometric Brownian Motion Monte Carlo
//!
//! Exact log-space discretization per path:
//! S_T = S_0 × exp(Σ ((μ − σ²/2)·dt + σ·√dt·Z)),  Z ~ N(0, 1),  dt = 1 / steps
//!
//! Each call seeds its own `StdRng`, so identical parameters reproduce
//! bit-identical percentiles and concurrent calls never share state.

use crate::money::{to_f64, to_money};
use crate::risk::{spread_ratio, RiskTier};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Annualized drift (long-run house price growth)
pub const DEFAULT_DRIFT: f64 = 0.045;
/// Annualized volatility of residential prices
pub const DEFAULT_VOLATILITY: f64 = 0.080;
pub const DEFAULT_PATHS: usize = 1000;
/// One trading year
pub const DEFAULT_STEPS: usize = 252;
pub const DEFAULT_SEED: u64 = 42;

/// Simulation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub drift: f64,
    pub volatility: f64,
    pub paths: usize,
    pub steps: usize,
    pub seed: u64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            drift: DEFAULT_DRIFT,
            volatility: DEFAULT_VOLATILITY,
            paths: DEFAULT_PATHS,
            steps: DEFAULT_STEPS,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationParams {
    /// Same parameters with a different seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Same parameters with a different volatility
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }
}

/// Simulation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Path count of zero
    #[error("Simulation needs at least one path")]
    NoPaths,
    /// Step count of zero
    #[error("Simulation needs at least one step")]
    NoSteps,
    /// A path overflowed or produced NaN
    #[error("Non-finite terminal value on path {0}")]
    NonFinite(usize),
    /// A percentile does not fit a currency amount
    #[error("Percentile {0} is not a representable amount")]
    Unrepresentable(f64),
}

/// 5th / 50th / 95th percentile of simulated terminal values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub p5: Decimal,
    pub p50: Decimal,
    pub p95: Decimal,
}

/// Result of a Monte Carlo run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    /// Percentiles rounded to whole currency units
    pub interval: ConfidenceInterval,
    /// Unrounded (p5, p50, p95)
    pub percentiles: (f64, f64, f64),
    /// Relative width `(p95 − p5) / p50`
    pub spread: f64,
    pub risk_tier: RiskTier,
}

/// Monte Carlo simulator bound to a parameter set
#[derive(Debug, Clone, Copy, Default)]
pub struct GbmSimulator {
    params: SimulationParams,
}

impl GbmSimulator {
    /// Create a simulator with the given parameters
    pub fn new(params: SimulationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Simulate from a spot value
    pub fn simulate(&self, spot_value: Decimal) -> Result<SimulationOutcome, SimulationError> {
        simulate(spot_value, &self.params)
    }
}

/// Run the simulation and classify the spread.
pub fn simulate(
    spot_value: Decimal,
    params: &SimulationParams,
) -> Result<SimulationOutcome, SimulationError> {
    let mut values = terminal_values(to_f64(spot_value), params)?;
    values.sort_by(f64::total_cmp);

    let p5 = percentile(&values, 5.0);
    let p50 = percentile(&values, 50.0);
    let p95 = percentile(&values, 95.0);

    let spread = spread_ratio(p5, p50, p95);
    let risk_tier = RiskTier::from_spread(spread);

    let interval = ConfidenceInterval {
        p5: to_money(p5).ok_or(SimulationError::Unrepresentable(p5))?,
        p50: to_money(p50).ok_or(SimulationError::Unrepresentable(p50))?,
        p95: to_money(p95).ok_or(SimulationError::Unrepresentable(p95))?,
    };

    tracing::debug!(
        spot = %spot_value,
        paths = params.paths,
        steps = params.steps,
        seed = params.seed,
        spread,
        risk = %risk_tier,
        "Monte Carlo complete"
    );

    Ok(SimulationOutcome {
        interval,
        percentiles: (p5, p50, p95),
        spread,
        risk_tier,
    })
}

/// Terminal value of every path, in path order.
///
/// Normals are drawn path-major: all steps of path 0, then path 1, and so on.
pub fn terminal_values(spot: f64, params: &SimulationParams) -> Result<Vec<f64>, SimulationError> {
    if params.paths == 0 {
        return Err(SimulationError::NoPaths);
    }
    if params.steps == 0 {
        return Err(SimulationError::NoSteps);
    }

    let mut rng = StdRng::seed_from_u64(params.seed);

    let dt = 1.0 / params.steps as f64;
    let drift = (params.drift - 0.5 * params.volatility * params.volatility) * dt;
    let diffusion = params.volatility * dt.sqrt();

    let mut values = Vec::with_capacity(params.paths);
    for path in 0..params.paths {
        let mut log_return = 0.0;
        for _ in 0..params.steps {
            let z: f64 = rng.sample(StandardNormal);
            log_return += drift + diffusion * z;
        }

        let terminal = spot * log_return.exp();
        if !terminal.is_finite() {
            return Err(SimulationError::NonFinite(path));
        }
        values.push(terminal);
    }

    Ok(values)
}

/// Percentile `q` (0..=100) of sorted data, linear interpolation between
/// order statistics. NaN for empty input.
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let rank = (q / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = rank.ceil() as usize;
            let weight = rank - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * weight
        }
    }
}
