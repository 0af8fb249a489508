//! Regional pricing table listing

use crate::pricing::{
    Region, DEFAULT_ANNUAL_GROWTH, DEFAULT_PARKING_PREMIUM, DEFAULT_UNIT_PRICE,
};
use std::fmt::Write;

/// Render the region table: unit price, annual growth and parking premium
pub fn format_regions() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:>12} {:>8} {:>12}", "Region", "Price/ping", "Growth", "Parking");
    let _ = writeln!(out, "{}", "─".repeat(44));

    for region in Region::ALL {
        let parking = region.parking_premium().unwrap_or(DEFAULT_PARKING_PREMIUM);
        let _ = writeln!(
            out,
            "{:<8} {:>12.1} {:>7.1}% {:>12}",
            region.label(),
            region.unit_price(),
            region.annual_growth() * 100.0,
            parking
        );
    }

    let _ = writeln!(out, "{}", "─".repeat(44));
    let _ = writeln!(
        out,
        "{:<8} {:>12.1} {:>7.1}% {:>12}",
        "(other)",
        DEFAULT_UNIT_PRICE,
        DEFAULT_ANNUAL_GROWTH * 100.0,
        DEFAULT_PARKING_PREMIUM
    );
    out
}
