use serde::{Deserialize, Serialize};

use crate::domain::{TrendHorizon, TrendLabel};

/// Outcome of classifying one horizon. Immutable once produced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TrendResult {
    pub horizon: TrendHorizon,
    /// Signed change from the first to the last sample of the window (percent)
    pub percent_change: f64,
    pub label: TrendLabel,
}

impl TrendResult {
    pub fn new(horizon: TrendHorizon, percent_change: f64, label: TrendLabel) -> Self {
        Self {
            horizon,
            percent_change,
            label,
        }
    }
}
