use serde::{Deserialize, Serialize};
use std::fmt;

/// The four trend signals the advisor reads.
///
/// The two short trends measure the last few hours, the cycles measure the
/// mid-term wave (MWC, weekly) and high wave (HWC, monthly) cycle.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum TrendHorizon {
    BtcPrice,
    BtcDominance,
    WeeklyCycle,
    MonthlyCycle,
}

impl TrendHorizon {
    /// The monthly cycle is only a confirmation signal; everything else is required.
    pub fn is_mandatory(&self) -> bool {
        !matches!(self, TrendHorizon::MonthlyCycle)
    }

    /// Short label used in the console report.
    pub fn report_label(&self) -> &'static str {
        match self {
            TrendHorizon::BtcPrice => "BTC 7h Trend",
            TrendHorizon::BtcDominance => "BTC.D 7h Trend",
            TrendHorizon::WeeklyCycle => "MWC Status",
            TrendHorizon::MonthlyCycle => "HWC Status",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TrendHorizon::BtcPrice => "btc_price",
            TrendHorizon::BtcDominance => "btc_dominance",
            TrendHorizon::WeeklyCycle => "weekly_cycle",
            TrendHorizon::MonthlyCycle => "monthly_cycle",
        }
    }
}

impl fmt::Display for TrendHorizon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
