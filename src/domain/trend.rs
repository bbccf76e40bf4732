use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a single trend signal over its lookback window.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum TrendLabel {
    Bullish,
    Bearish,
    Sideways,
}

impl TrendLabel {
    /// Label a percentage change against a symmetric threshold pair (+t, -t).
    /// Both boundaries are inclusive.
    pub fn from_percent_change(percent_change: f64, threshold_pct: f64) -> Self {
        if percent_change >= threshold_pct {
            TrendLabel::Bullish
        } else if percent_change <= -threshold_pct {
            TrendLabel::Bearish
        } else {
            TrendLabel::Sideways
        }
    }

    /// Directional polarity: +1 bullish, -1 bearish, 0 sideways.
    pub fn polarity(&self) -> i8 {
        match self {
            TrendLabel::Bullish => 1,
            TrendLabel::Bearish => -1,
            TrendLabel::Sideways => 0,
        }
    }

    /// Two labels agree only when they share a non-neutral direction.
    pub fn agrees_with(&self, other: TrendLabel) -> bool {
        self.polarity() != 0 && self.polarity() == other.polarity()
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrendLabel::Bullish => write!(f, "Bullish"),
            TrendLabel::Bearish => write!(f, "Bearish"),
            TrendLabel::Sideways => write!(f, "Sideways"),
        }
    }
}
