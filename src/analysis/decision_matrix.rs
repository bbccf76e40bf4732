//! Decision matrix: (BTC, BTC.D, weekly cycle) -> recommendation + risk.
//!
//! Every one of the 27 label combinations is written out explicitly. The
//! monthly cycle never takes part in the key; its disagreement with the weekly
//! cycle is reported through the risk context instead.

use crate::domain::{RiskLevel, TrendLabel};
use crate::models::{DecisionKey, MatrixEntry};

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;

use crate::domain::RiskLevel::{High, Low, Medium};
use crate::domain::TrendLabel::{Bearish, Bullish, Sideways};

/// Returned if a key is ever missing from the table.
pub const DEFAULT_TEXT: &str = "Market range";
pub const DEFAULT_RISK: RiskLevel = Low;

const fn entry(
    btc: TrendLabel,
    dominance: TrendLabel,
    weekly_cycle: TrendLabel,
    text: &'static str,
    risk: RiskLevel,
) -> MatrixEntry {
    MatrixEntry {
        key: DecisionKey {
            btc,
            dominance,
            weekly_cycle,
        },
        text,
        risk,
    }
}

#[rustfmt::skip]
pub static DECISION_MATRIX: [MatrixEntry; 27] = [
    // BTC Bullish, BTC.D Bullish
    entry(Bullish, Bullish, Bullish, "Strong BTC buy", Low),
    entry(Bullish, Bullish, Sideways, "Moderate BTC buy", Medium),
    entry(Bullish, Bullish, Bearish, "Avoid BTC", High),
    // BTC Bullish, BTC.D Bearish
    entry(Bullish, Bearish, Bullish, "Risky altcoin buy (needs confirmation)", High),
    entry(Bullish, Bearish, Sideways, "Altcoin accumulation", Medium),
    entry(Bullish, Bearish, Bearish, "Altcoin sell", High),
    // BTC Bullish, BTC.D Sideways
    entry(Bullish, Sideways, Bullish, "Strong BTC buy", Medium),
    entry(Bullish, Sideways, Sideways, "BTC accumulation", Medium),
    entry(Bullish, Sideways, Bearish, "BTC sell", High),
    // BTC Bearish, BTC.D Bullish
    entry(Bearish, Bullish, Bullish, "BTC short", Medium),
    entry(Bearish, Bullish, Sideways, "BTC short", Low),
    entry(Bearish, Bullish, Bearish, "Strong BTC short", High),
    // BTC Bearish, BTC.D Bearish
    entry(Bearish, Bearish, Bullish, "Altcoin buy", Low),
    entry(Bearish, Bearish, Sideways, "Altcoin accumulation", Low),
    entry(Bearish, Bearish, Bearish, "Strong altcoin buy", Medium),
    // BTC Bearish, BTC.D Sideways
    entry(Bearish, Sideways, Bullish, "BTC short", High),
    entry(Bearish, Sideways, Sideways, "Market neutral", Low),
    entry(Bearish, Sideways, Bearish, "Altcoin buy", Medium),
    // BTC Sideways, BTC.D Bullish
    entry(Sideways, Bullish, Bullish, "BTC accumulation", Low),
    entry(Sideways, Bullish, Sideways, "Market watch", Low),
    entry(Sideways, Bullish, Bearish, "Altcoin sell", Medium),
    // BTC Sideways, BTC.D Bearish
    entry(Sideways, Bearish, Bullish, "Altcoin accumulation", Low),
    entry(Sideways, Bearish, Sideways, "Market watch", Low),
    entry(Sideways, Bearish, Bearish, "BTC buy", Medium),
    // BTC Sideways, BTC.D Sideways
    entry(Sideways, Sideways, Bullish, "Market range", Low),
    entry(Sideways, Sideways, Sideways, "Market range", Low),
    entry(Sideways, Sideways, Bearish, "Market indecisive", Low),
];

/// Resolve a combination of the three mandatory labels.
pub fn lookup(btc: TrendLabel, dominance: TrendLabel, weekly_cycle: TrendLabel) -> MatrixEntry {
    lookup_key(DecisionKey::new(btc, dominance, weekly_cycle))
}

/// Total lookup: a missing row yields the neutral default instead of failing.
pub fn lookup_key(key: DecisionKey) -> MatrixEntry {
    let found = DECISION_MATRIX.iter().find(|e| e.key == key).copied();

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_matrix_lookups {
        log::debug!("Decision matrix lookup {:?} -> {:?}", key, found);
    }

    found.unwrap_or_else(|| {
        log::warn!(
            "No decision matrix entry for {:?}; falling back to '{}'",
            key,
            DEFAULT_TEXT
        );
        MatrixEntry {
            key,
            text: DEFAULT_TEXT,
            risk: DEFAULT_RISK,
        }
    })
}
