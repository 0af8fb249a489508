//! Text report for CLI output

use super::ValuationResult;
use rust_decimal_macros::dec;

impl ValuationResult {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let ci = &self.confidence_interval;
        let b = &self.breakdown;
        let escalation = if self.risk_escalated {
            " (escalated by LTV)"
        } else {
            ""
        };

        format!(
            r#"
══════════════════════════════════════════════════════
               VALUATION RESULT ({mode:?})
══════════════════════════════════════════════════════
Region / Type:    {region} / {building_type}

ESTIMATE
───────────────────────────────────────────────────────
Estimated Value:  {estimated}
P5 / P50 / P95:   {p5} / {p50} / {p95}
LTV Ratio:        {ltv:.2}%
Risk Level:       {risk} {risk_label}{escalation}

MODELS
───────────────────────────────────────────────────────
Base Value:       {base}
Market Index:     {market_index:.2}
Sentiment Score:  {sentiment:+.4}

BREAKDOWN
───────────────────────────────────────────────────────
Unit Price:       {unit_price} / ping
Area:             {area} ping
Building:         ×{building:.2}
Age:              ×{age:.3}
Floor:            ×{floor:.2}
Layout:           ×{layout:.2}
Main Value:       {main_value}
Parking Premium:  {parking}
══════════════════════════════════════════════════════
"#,
            mode = self.mode,
            region = self.region,
            building_type = self.building_type,
            estimated = self.estimated_value,
            p5 = ci.p5,
            p50 = ci.p50,
            p95 = ci.p95,
            ltv = self.ltv_ratio * dec!(100),
            risk = self.risk_level,
            risk_label = self.risk_level.report_label(),
            base = self.base_value,
            market_index = self.market_index,
            sentiment = self.sentiment_score,
            unit_price = b.unit_price_per_ping,
            area = b.area_ping,
            building = b.building_multiplier,
            age = b.age_depreciation,
            floor = b.floor_factor,
            layout = b.layout_efficiency,
            main_value = b.main_value,
            parking = b.parking_premium,
        )
    }
}
