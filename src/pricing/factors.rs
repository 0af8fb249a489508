//! Structural adjustment factors: age, floor and layout

use super::tables::BuildingType;

/// Lowest depreciation factor, applied to anything older than 40 years
pub const MIN_AGE_FACTOR: f64 = 0.55;

/// Age depreciation factor in [0.55, 1.00].
///
/// Piecewise linear and continuous at 5, 20 and 40 years. Computed in
/// per-mille integers so the boundary values are exact.
pub fn age_depreciation(age: i32) -> f64 {
    let per_mille = if age <= 0 {
        1000
    } else if age <= 5 {
        1000 - age * 10
    } else if age <= 20 {
        950 - (age - 5) * 20
    } else if age <= 40 {
        650 - (age - 20) * 5
    } else {
        return MIN_AGE_FACTOR;
    };
    f64::from(per_mille) / 1000.0
}

/// Floor adjustment factor.
///
/// Townhouses and villas ignore the floor. Otherwise the ground floor is
/// discounted and higher bands earn a premium.
pub fn floor_adjustment(floor: i32, building_type: Option<BuildingType>) -> f64 {
    if building_type.is_some_and(BuildingType::is_floor_exempt) {
        return 1.00;
    }

    match floor {
        1 => 0.88,
        f if f <= 3 => 0.95,
        f if f <= 7 => 1.00,
        f if f <= 15 => 1.05,
        f if f <= 25 => 1.08,
        _ => 1.10,
    }
}

/// Layout efficiency factor from keyword matching, first match wins
pub fn layout_efficiency(layout: &str) -> f64 {
    let layout = layout.trim();

    if layout.contains("4房") {
        0.97
    } else if layout.contains("3房") {
        1.02
    } else if layout.contains("2房") {
        1.05
    } else if layout.contains("1房") || layout.contains("套房") {
        0.95
    } else {
        1.00
    }
}
