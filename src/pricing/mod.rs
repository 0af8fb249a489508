//! Deterministic base-value pricing
//!
//! Regional unit prices and structural coefficients combine into a base value
//! plus a [`Breakdown`] that explains it.

mod base_value;
mod factors;
mod tables;

pub use base_value::{price, Breakdown};
pub use factors::{age_depreciation, floor_adjustment, layout_efficiency, MIN_AGE_FACTOR};
pub use tables::{
    annual_growth, building_multiplier, demand_factor, parking_premium, unit_price, BuildingType,
    Region, DEFAULT_ANNUAL_GROWTH, DEFAULT_BUILDING_MULTIPLIER, DEFAULT_DEMAND_FACTOR,
    DEFAULT_PARKING_PREMIUM, DEFAULT_UNIT_PRICE, UNIT_SCALE,
};
