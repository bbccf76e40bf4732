//! Confidence score from the alignment of the three mandatory trends.
//!
//! Start at `base`, add `agreement_step` for every pair among
//! (BTC, BTC.D, weekly cycle) sharing a direction, subtract
//! `conflict_penalty` when the cycles disagree, then clamp into
//! [`floor`, `ceiling`]. Sideways is neutral and never counts as agreement,
//! not even with another Sideways. The monthly cycle only enters through the
//! conflict penalty.

use itertools::Itertools;

use crate::config::ConfidenceSettings;
use crate::models::{ConflictInfo, TrendSnapshot};
use crate::utils::maths_utils::clamp_score;

pub fn score(snapshot: &TrendSnapshot, conflict: &ConflictInfo, settings: &ConfidenceSettings) -> u8 {
    // Missing mandatory trends contribute nothing; assembly rejects them separately.
    let labels: Vec<_> = [
        &snapshot.btc_price,
        &snapshot.btc_dominance,
        &snapshot.weekly_cycle,
    ]
    .into_iter()
    .flatten()
    .map(|result| result.label)
    .collect();

    let aligned_pairs = labels
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| a.agrees_with(**b))
        .count() as i32;

    let mut raw = settings
        .base
        .saturating_add(aligned_pairs.saturating_mul(settings.agreement_step));
    if conflict.is_conflict() {
        raw = raw.saturating_sub(settings.conflict_penalty);
    }

    clamp_score(raw, settings.floor, settings.ceiling)
}
