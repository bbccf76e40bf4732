//! Console rendering of an analysis report.

use std::fmt::Write;

use crate::domain::TrendHorizon;
use crate::engine::AnalysisReport;
use crate::models::TrendResult;
use crate::utils::time_utils::to_iso_utc;

/// `▲` for a rise, `▼` for anything else (including no change)
pub fn trend_arrow(percent_change: f64) -> char {
    if percent_change > 0.0 { '▲' } else { '▼' }
}

/// `BTC 7h Trend: ▲ 0.60% (Bullish)`
pub fn format_short_trend(result: &TrendResult) -> String {
    format!(
        "{}: {} {:.2}% ({})",
        result.horizon.report_label(),
        trend_arrow(result.percent_change),
        result.percent_change.abs(),
        result.label
    )
}

/// `MWC Status: Bearish (Weekly -5.9%)`
pub fn format_cycle(result: &TrendResult) -> String {
    let period = match result.horizon {
        TrendHorizon::MonthlyCycle => "Monthly",
        _ => "Weekly",
    };
    format!(
        "{}: {} ({} {:+.1}%)",
        result.horizon.report_label(),
        result.label,
        period,
        result.percent_change
    )
}

/// Render the full text report. The HWC line is left out when no monthly
/// series was supplied.
pub fn render_text(report: &AnalysisReport) -> String {
    let rec = &report.recommendation;
    let snapshot = &report.snapshot;
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "[{}]", to_iso_utc(&rec.generated_at));
    for result in [&snapshot.btc_price, &snapshot.btc_dominance].into_iter().flatten() {
        let _ = writeln!(out, "{}", format_short_trend(result));
    }
    for result in [&snapshot.weekly_cycle, &snapshot.monthly_cycle].into_iter().flatten() {
        let _ = writeln!(out, "{}", format_cycle(result));
    }
    let _ = writeln!(out, "RECOMMENDATION: {}", rec);
    let _ = writeln!(out, "RISK CONTEXT: {}", rec.risk_context);
    let _ = writeln!(
        out,
        "CONFIDENCE: {}% (based on historical pattern match)",
        rec.confidence
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lookup;
    use crate::domain::{RiskLevel, TrendLabel};
    use crate::models::{ConflictInfo, Recommendation, TrendSnapshot};
    use chrono::{TimeZone, Utc};

    fn report(monthly: Option<TrendResult>) -> AnalysisReport {
        use TrendLabel::{Bearish, Sideways};
        let mut results = vec![
            TrendResult::new(TrendHorizon::BtcPrice, -0.34, Sideways),
            TrendResult::new(TrendHorizon::BtcDominance, 0.21, Sideways),
            TrendResult::new(TrendHorizon::WeeklyCycle, -5.9, Bearish),
        ];
        results.extend(monthly);
        AnalysisReport {
            snapshot: TrendSnapshot::from_results(results),
            conflict: ConflictInfo::Conflict {
                weekly: Bearish,
                monthly: Sideways,
            },
            matrix_entry: lookup(Sideways, Sideways, Bearish),
            recommendation: Recommendation {
                text: "Market indecisive".into(),
                risk_level: RiskLevel::Low,
                confidence: 50,
                risk_context: "MWC-HWC conflict (Bearish vs Sideways)".into(),
                generated_at: Utc.with_ymd_and_hms(2025, 8, 29, 19, 0, 0).unwrap(),
            },
            duration_ms: 0,
        }
    }

    #[test]
    fn test_render_full_report() {
        let monthly = TrendResult::new(TrendHorizon::MonthlyCycle, 1.1, TrendLabel::Sideways);
        let text = render_text(&report(Some(monthly)));
        let expected = "\
[2025-08-29T19:00:00Z]
BTC 7h Trend: ▼ 0.34% (Sideways)
BTC.D 7h Trend: ▲ 0.21% (Sideways)
MWC Status: Bearish (Weekly -5.9%)
HWC Status: Sideways (Monthly +1.1%)
RECOMMENDATION: Market indecisive (Low risk)
RISK CONTEXT: MWC-HWC conflict (Bearish vs Sideways)
CONFIDENCE: 50% (based on historical pattern match)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_hwc_line_omitted_without_monthly() {
        let text = render_text(&report(None));
        assert!(!text.contains("HWC Status"));
        assert!(text.contains("MWC Status"));
    }

    #[test]
    fn test_flat_change_points_down() {
        assert_eq!(trend_arrow(0.0), '▼');
        assert_eq!(trend_arrow(0.01), '▲');
    }
}
