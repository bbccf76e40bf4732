use serde::{Deserialize, Serialize};

use crate::domain::TrendHorizon;
use crate::models::{ConflictInfo, MatrixEntry, Recommendation, SampleSeries, TrendSnapshot};

/// The already-fetched series of one analysis run
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AnalysisRequest {
    pub btc_price: SampleSeries,
    pub btc_dominance: SampleSeries,
    pub weekly_cycle: SampleSeries,
    // Monthly confirmation is optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_cycle: Option<SampleSeries>,
}

impl AnalysisRequest {
    /// Every supplied series paired with its horizon, mandatory ones first.
    pub fn jobs(&self) -> Vec<(TrendHorizon, &SampleSeries)> {
        let mut jobs = vec![
            (TrendHorizon::BtcPrice, &self.btc_price),
            (TrendHorizon::BtcDominance, &self.btc_dominance),
            (TrendHorizon::WeeklyCycle, &self.weekly_cycle),
        ];
        if let Some(monthly) = &self.monthly_cycle {
            jobs.push((TrendHorizon::MonthlyCycle, monthly));
        }
        jobs
    }
}

/// Everything the presentation layer needs from one run
#[derive(Serialize, Debug, Clone)]
pub struct AnalysisReport {
    pub snapshot: TrendSnapshot,
    pub conflict: ConflictInfo,
    pub matrix_entry: MatrixEntry,
    pub recommendation: Recommendation,
    // Wall time spent inside the engine
    pub duration_ms: u128,
}
