//! Base value assembly from regional and structural coefficients

use super::factors::{age_depreciation, floor_adjustment, layout_efficiency};
use super::tables::{self, BuildingType, UNIT_SCALE};
use crate::money::{try_money, AmountError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Coefficients behind a base value, kept for explainability.
///
/// `main_value = unit_price × area × building_multiplier × age_factor ×
/// floor_factor × layout_factor × 10_000` and
/// `base_value = main_value + parking_premium`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Regional unit price (10k per ping)
    pub unit_price_per_ping: f64,
    /// Floor area in ping
    pub area_ping: f64,
    pub building_multiplier: f64,
    pub age_depreciation: f64,
    pub floor_factor: f64,
    pub layout_efficiency: f64,
    /// Structural value before parking, whole currency units
    pub main_value: Decimal,
    /// Zero when the property has no parking space
    pub parking_premium: Decimal,
}

impl Breakdown {
    /// Base value implied by this breakdown
    pub fn base_value(&self) -> Decimal {
        self.main_value + self.parking_premium
    }
}

/// Price a property from its structural attributes.
///
/// Unknown regions, building types and layouts resolve to their table
/// defaults. Returns the base value in whole currency units, or an error when
/// the structural value overflows the currency type.
pub fn price(
    region: &str,
    building_type: &str,
    age: i32,
    floor: i32,
    layout: &str,
    has_parking: bool,
    area: f64,
) -> Result<(Decimal, Breakdown), AmountError> {
    let kind = BuildingType::lookup(building_type);

    let unit_price = tables::unit_price(region);
    let building_multiplier = tables::building_multiplier(building_type);
    let age_factor = age_depreciation(age);
    let floor_factor = floor_adjustment(floor, kind);
    let layout_factor = layout_efficiency(layout);

    let main_value = unit_price
        * area
        * building_multiplier
        * age_factor
        * floor_factor
        * layout_factor
        * UNIT_SCALE;

    let parking_premium = if has_parking {
        tables::parking_premium(region)
    } else {
        Decimal::ZERO
    };

    let breakdown = Breakdown {
        unit_price_per_ping: unit_price,
        area_ping: area,
        building_multiplier,
        age_depreciation: age_factor,
        floor_factor,
        layout_efficiency: layout_factor,
        main_value: try_money("pricing", main_value)?,
        parking_premium,
    };

    tracing::debug!(
        region,
        building_type,
        unit_price,
        main_value = %breakdown.main_value,
        parking_premium = %parking_premium,
        "Priced base value"
    );

    Ok((breakdown.base_value(), breakdown))
}
