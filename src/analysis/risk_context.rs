use crate::domain::TrendLabel::{Bearish, Bullish};
use crate::models::DecisionKey;

pub const STANDARD_NOTE: &str = "Standard market conditions - monitor closely";

/// Neutral risk note for a combination, used when the cycles do not conflict.
pub fn risk_note(key: &DecisionKey) -> &'static str {
    match (key.btc, key.dominance, key.weekly_cycle) {
        (Bullish, Bullish, Bullish) => "Low risk - All indicators aligned bullish",
        (Bullish, Bearish, Bullish) => {
            "Requires HWC confirmation - monitor for weekly trend reversal"
        }
        (Bullish, Bearish, Bearish) => "High risk - Altcoin market weakness",
        (Bearish, Bullish, Bullish) => "Medium risk - BTC weakness with dominance strength",
        (Bearish, Bullish, Bearish) => "High risk - Strong bearish momentum",
        _ => STANDARD_NOTE,
    }
}
