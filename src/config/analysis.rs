//! Analysis and computation configuration

use serde::{Deserialize, Serialize};

use crate::domain::TrendHorizon;
use crate::utils::TimeUtils;

/// Per-horizon classification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonSettings {
    // Symmetric threshold in percent: >= +t is Bullish, <= -t is Bearish
    pub threshold_pct: f64,
    // Largest allowed gap between consecutive samples (ms)
    pub max_gap_ms: i64,
    // Number of trailing samples the trend is measured over. None = whole series
    pub lookback_samples: Option<usize>,
}

/// Settings for the confidence score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceSettings {
    pub base: i32,
    // Added per pair of directionally aligned trends
    pub agreement_step: i32,
    // Subtracted when the weekly and monthly cycles disagree
    pub conflict_penalty: i32,
    pub floor: u8,
    pub ceiling: u8,
}

/// The Master Analysis Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    // Minimum number of samples a series needs before a trend can be measured
    pub min_samples: usize,

    // Sub-groups
    pub btc_price: HorizonSettings,
    pub btc_dominance: HorizonSettings,
    pub weekly_cycle: HorizonSettings,
    pub monthly_cycle: HorizonSettings,
    pub confidence: ConfidenceSettings,
}

impl AnalysisConfig {
    pub fn horizon(&self, horizon: TrendHorizon) -> &HorizonSettings {
        match horizon {
            TrendHorizon::BtcPrice => &self.btc_price,
            TrendHorizon::BtcDominance => &self.btc_dominance,
            TrendHorizon::WeeklyCycle => &self.weekly_cycle,
            TrendHorizon::MonthlyCycle => &self.monthly_cycle,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        ANALYSIS.clone()
    }
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    min_samples: 2,

    // Hourly samples over 24h, trend read over the last 7 candles ("7h trend")
    btc_price: HorizonSettings {
        threshold_pct: 0.5,
        max_gap_ms: TimeUtils::MS_IN_90_MIN,
        lookback_samples: Some(7),
    },
    btc_dominance: HorizonSettings {
        threshold_pct: 0.5,
        max_gap_ms: TimeUtils::MS_IN_90_MIN,
        lookback_samples: Some(7),
    },

    // Hourly samples over 168h
    weekly_cycle: HorizonSettings {
        threshold_pct: 2.0,
        max_gap_ms: TimeUtils::MS_IN_90_MIN,
        lookback_samples: None,
    },

    // Daily samples over 99 days
    monthly_cycle: HorizonSettings {
        threshold_pct: 5.0,
        max_gap_ms: TimeUtils::MS_IN_36_H,
        lookback_samples: None,
    },

    confidence: ConfidenceSettings {
        base: 50,
        agreement_step: 15,
        conflict_penalty: 10,
        floor: 50,
        ceiling: 95,
    },
};
