//! Trend classification.
//!
//! Turns a sample series into a signed percentage change and a three-way label.
//! The change is measured between the chronologically first and last sample of
//! the horizon's trailing window, never between the window's extremes.

use crate::config::{AnalysisConfig, HorizonSettings};
use crate::domain::{TrendHorizon, TrendLabel};
use crate::errors::EngineError;
use crate::models::{SampleSeries, TrendResult};
use crate::utils::maths_utils::percent_change;

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;

/// Classify `series` with the settings configured for `horizon`.
pub fn classify(
    series: &SampleSeries,
    horizon: TrendHorizon,
    config: &AnalysisConfig,
) -> Result<TrendResult, EngineError> {
    classify_with(series, horizon, config.horizon(horizon), config.min_samples)
}

/// Classify against explicit settings.
///
/// Fails with `IncompleteData` when fewer than `min_samples` are available,
/// `TimestampDiscontinuity` when the series has a gap wider than
/// `settings.max_gap_ms` (or goes backwards), and `InvalidSample` when the
/// reference value cannot anchor a percentage.
pub fn classify_with(
    series: &SampleSeries,
    horizon: TrendHorizon,
    settings: &HorizonSettings,
    min_samples: usize,
) -> Result<TrendResult, EngineError> {
    series.require_min_samples(horizon, min_samples)?;
    series.validate_continuity(horizon, settings.max_gap_ms)?;

    let window = series.trailing_window(settings.lookback_samples);
    let window_start = series.len() - window.len();

    let (first, last) = match (window.first(), window.last()) {
        (Some(first), Some(last)) if window.len() >= min_samples => (first, last),
        _ => {
            return Err(EngineError::IncompleteData {
                horizon,
                required: min_samples,
                found: window.len(),
            });
        }
    };

    let change = percent_change(first.value, last.value).ok_or_else(|| {
        let (index, value) = if first.value.is_finite() && first.value != 0.0 {
            (series.len() - 1, last.value)
        } else {
            (window_start, first.value)
        };
        EngineError::InvalidSample {
            horizon,
            index,
            value,
        }
    })?;

    let label = TrendLabel::from_percent_change(change, settings.threshold_pct);

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_trend_details {
        log::debug!(
            "{horizon}: window {} of {} samples, {:.4} -> {:.4} = {:+.3}% (t={}) => {label}",
            window.len(),
            series.len(),
            first.value,
            last.value,
            change,
            settings.threshold_pct
        );
    }

    Ok(TrendResult::new(horizon, change, label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ANALYSIS;
    use crate::models::Sample;
    use crate::utils::TimeUtils;

    const H: i64 = TimeUtils::MS_IN_H;

    fn hourly(values: &[f64]) -> SampleSeries {
        SampleSeries::from_values(1_756_468_800_000, H, values)
    }

    #[test]
    fn test_small_rise_is_bullish() {
        let result = classify(&hourly(&[100.0, 100.6]), TrendHorizon::BtcPrice, &ANALYSIS).unwrap();
        assert!((result.percent_change - 0.6).abs() < 1e-9);
        assert_eq!(result.label, TrendLabel::Bullish);
        assert_eq!(result.horizon, TrendHorizon::BtcPrice);
    }

    #[test]
    fn test_small_drop_is_sideways() {
        let result =
            classify(&hourly(&[100.0, 99.66]), TrendHorizon::BtcDominance, &ANALYSIS).unwrap();
        assert!((result.percent_change + 0.34).abs() < 1e-9);
        assert_eq!(result.label, TrendLabel::Sideways);
    }

    #[test]
    fn test_uses_first_and_last_not_extremes() {
        // Peaks at 120 and dips to 80, but ends 1% above where it started
        let result = classify(
            &hourly(&[100.0, 120.0, 80.0, 101.0]),
            TrendHorizon::WeeklyCycle,
            &ANALYSIS,
        )
        .unwrap();
        assert!((result.percent_change - 1.0).abs() < 1e-9);
        assert_eq!(result.label, TrendLabel::Sideways);
    }

    #[test]
    fn test_short_trend_reads_trailing_window() {
        // 24 hourly closes; only the last 7 count for the short trend
        let mut values = vec![50.0; 17];
        values.extend([100.0, 100.1, 100.2, 100.3, 100.4, 100.5, 101.0]);
        let series = hourly(&values);

        let short = classify(&series, TrendHorizon::BtcPrice, &ANALYSIS).unwrap();
        assert!((short.percent_change - 1.0).abs() < 1e-9);
        assert_eq!(short.label, TrendLabel::Bullish);

        // The weekly cycle has no lookback and spans the whole series
        let weekly = classify(&series, TrendHorizon::WeeklyCycle, &ANALYSIS).unwrap();
        assert!((weekly.percent_change - 102.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_is_overridable() {
        let mut config = ANALYSIS.clone();
        config.btc_price.threshold_pct = 0.3;
        let result = classify(&hourly(&[100.0, 99.66]), TrendHorizon::BtcPrice, &config).unwrap();
        assert_eq!(result.label, TrendLabel::Bearish);
    }

    #[test]
    fn test_cycle_thresholds() {
        let weekly = classify(&hourly(&[100.0, 94.1]), TrendHorizon::WeeklyCycle, &ANALYSIS).unwrap();
        assert_eq!(weekly.label, TrendLabel::Bearish);

        let daily = SampleSeries::from_values(0, TimeUtils::MS_IN_D, &[100.0, 101.1]);
        let monthly = classify(&daily, TrendHorizon::MonthlyCycle, &ANALYSIS).unwrap();
        assert_eq!(monthly.label, TrendLabel::Sideways);
    }

    #[test]
    fn test_single_sample_is_incomplete() {
        let err = classify(&hourly(&[100.0]), TrendHorizon::BtcPrice, &ANALYSIS).unwrap_err();
        assert_eq!(err.code(), "INCOMPLETE_DATA");
        let err = classify(&SampleSeries::default(), TrendHorizon::BtcPrice, &ANALYSIS).unwrap_err();
        assert_eq!(err.code(), "INCOMPLETE_DATA");
    }

    #[test]
    fn test_gap_is_reported_not_defaulted() {
        let series = SampleSeries::new(vec![
            Sample::new(0, 100.0),
            Sample::new(H, 100.0),
            Sample::new(5 * H, 100.0),
        ]);
        let err = classify(&series, TrendHorizon::BtcPrice, &ANALYSIS).unwrap_err();
        assert_eq!(err.code(), "TIMESTAMP_DISCONTINUITY");
    }

    #[test]
    fn test_daily_monthly_series_passes_continuity() {
        let values: Vec<f64> = (0..99).map(|i| 100.0 + i as f64 * 0.1).collect();
        let daily = SampleSeries::from_values(0, TimeUtils::MS_IN_D, &values);
        assert!(classify(&daily, TrendHorizon::MonthlyCycle, &ANALYSIS).is_ok());
        // ...but the same spacing breaks an hourly horizon
        assert!(classify(&daily, TrendHorizon::WeeklyCycle, &ANALYSIS).is_err());
    }

    #[test]
    fn test_zero_reference_is_invalid() {
        let err = classify(&hourly(&[0.0, 1.0]), TrendHorizon::BtcPrice, &ANALYSIS).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidSample {
                horizon: TrendHorizon::BtcPrice,
                index: 0,
                value: 0.0
            }
        );
    }

    #[test]
    fn test_label_matches_threshold_rule() {
        let threshold = ANALYSIS.btc_price.threshold_pct;
        for step in -300..=300 {
            let last = 100.0 + step as f64 * 0.01;
            let result = classify(&hourly(&[100.0, last]), TrendHorizon::BtcPrice, &ANALYSIS).unwrap();
            let pct = result.percent_change;
            let expected = if pct >= threshold {
                TrendLabel::Bullish
            } else if pct <= -threshold {
                TrendLabel::Bearish
            } else {
                TrendLabel::Sideways
            };
            assert_eq!(result.label, expected, "pct = {pct}");
        }
    }

    #[test]
    fn test_classify_is_idempotent() {
        let series = hourly(&[100.0, 100.2, 99.9, 100.7]);
        let a = classify(&series, TrendHorizon::BtcPrice, &ANALYSIS).unwrap();
        let b = classify(&series, TrendHorizon::BtcPrice, &ANALYSIS).unwrap();
        assert_eq!(a, b);
    }
}
