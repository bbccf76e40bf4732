use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::{Candle, TrendHorizon};
use crate::errors::EngineError;
use crate::utils::TimeUtils;

// ============================================================================
// Sample / SampleSeries: the raw input of one trend horizon
// ============================================================================

/// A single observation (price or dominance percentage).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp_ms: i64,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp_ms: i64, value: f64) -> Self {
        Self {
            timestamp_ms,
            value,
        }
    }
}

/// Chronologically ordered samples over a fixed lookback window.
/// Serialized as a plain JSON array of samples.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Build an evenly spaced series starting at `start_ms`.
    pub fn from_values(start_ms: i64, interval_ms: i64, values: &[f64]) -> Self {
        let samples = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Sample::new(start_ms + i as i64 * interval_ms, value))
            .collect();
        Self { samples }
    }

    pub fn from_candles(candles: &[Candle]) -> Self {
        Self {
            samples: candles.iter().map(Candle::to_sample).collect(),
        }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// The most recent `lookback` samples, or the whole series when `lookback`
    /// is `None` or longer than the series.
    pub fn trailing_window(&self, lookback: Option<usize>) -> &[Sample] {
        match lookback {
            Some(n) => {
                let start_index = self.samples.len().saturating_sub(n);
                &self.samples[start_index..]
            }
            None => &self.samples,
        }
    }

    pub fn require_min_samples(
        &self,
        horizon: TrendHorizon,
        required: usize,
    ) -> Result<(), EngineError> {
        if self.samples.len() < required {
            return Err(EngineError::IncompleteData {
                horizon,
                required,
                found: self.samples.len(),
            });
        }
        Ok(())
    }

    /// Every consecutive pair must be strictly increasing and at most
    /// `max_gap_ms` apart.
    pub fn validate_continuity(
        &self,
        horizon: TrendHorizon,
        max_gap_ms: i64,
    ) -> Result<(), EngineError> {
        for (index, (prev, next)) in self.samples.iter().tuple_windows().enumerate() {
            // An unrepresentable gap is as broken as an oversized one.
            let gap_ms = next
                .timestamp_ms
                .checked_sub(prev.timestamp_ms)
                .unwrap_or(i64::MAX);
            if gap_ms <= 0 || gap_ms > max_gap_ms {
                return Err(EngineError::TimestampDiscontinuity {
                    horizon,
                    index,
                    gap_hours: TimeUtils::ms_to_hours(gap_ms),
                    max_gap_hours: TimeUtils::ms_to_hours(max_gap_ms),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: i64 = TimeUtils::MS_IN_H;

    #[test]
    fn test_trailing_window() {
        let series = SampleSeries::from_values(0, H, &[1.0, 2.0, 3.0, 4.0, 5.0]);
        let window = series.trailing_window(Some(3));
        assert_eq!(window.len(), 3);
        assert_eq!(window[0].value, 3.0);
        assert_eq!(series.trailing_window(Some(10)).len(), 5);
        assert_eq!(series.trailing_window(None).len(), 5);
    }

    #[test]
    fn test_continuity_accepts_regular_series() {
        let series = SampleSeries::from_values(0, H, &[1.0, 2.0, 3.0]);
        assert!(series.validate_continuity(TrendHorizon::BtcPrice, H).is_ok());
    }

    #[test]
    fn test_continuity_rejects_gap() {
        let series = SampleSeries::new(vec![
            Sample::new(0, 1.0),
            Sample::new(H, 1.0),
            Sample::new(4 * H, 1.0),
        ]);
        let err = series
            .validate_continuity(TrendHorizon::BtcDominance, TimeUtils::MS_IN_90_MIN)
            .unwrap_err();
        match err {
            EngineError::TimestampDiscontinuity {
                horizon,
                index,
                gap_hours,
                ..
            } => {
                assert_eq!(horizon, TrendHorizon::BtcDominance);
                assert_eq!(index, 1);
                assert!((gap_hours - 3.0).abs() < 1e-9);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_continuity_rejects_unordered() {
        let series = SampleSeries::new(vec![Sample::new(2 * H, 1.0), Sample::new(H, 1.0)]);
        let err = series
            .validate_continuity(TrendHorizon::WeeklyCycle, 2 * H)
            .unwrap_err();
        assert_eq!(err.code(), "TIMESTAMP_DISCONTINUITY");

        let duplicated = SampleSeries::new(vec![Sample::new(H, 1.0), Sample::new(H, 1.0)]);
        assert!(
            duplicated
                .validate_continuity(TrendHorizon::WeeklyCycle, 2 * H)
                .is_err()
        );
    }

    #[test]
    fn test_continuity_rejects_extreme_timestamps() {
        let series = SampleSeries::new(vec![
            Sample::new(i64::MIN, 1.0),
            Sample::new(i64::MAX, 1.0),
        ]);
        let err = series
            .validate_continuity(TrendHorizon::WeeklyCycle, TimeUtils::MS_IN_90_MIN)
            .unwrap_err();
        assert_eq!(err.code(), "TIMESTAMP_DISCONTINUITY");

        let backwards = SampleSeries::new(vec![
            Sample::new(i64::MAX, 1.0),
            Sample::new(i64::MIN, 1.0),
        ]);
        assert!(
            backwards
                .validate_continuity(TrendHorizon::WeeklyCycle, TimeUtils::MS_IN_90_MIN)
                .is_err()
        );
    }

    #[test]
    fn test_min_samples() {
        let series = SampleSeries::from_values(0, H, &[1.0]);
        let err = series
            .require_min_samples(TrendHorizon::BtcPrice, 2)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::IncompleteData {
                horizon: TrendHorizon::BtcPrice,
                required: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_serializes_as_array() {
        let series = SampleSeries::from_values(0, H, &[1.5, 2.5]);
        let json = serde_json::to_string(&series).unwrap();
        assert!(json.starts_with('['));
        let back: SampleSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(back, series);
    }
}
