use chrono::{DateTime, Utc};

use crate::analysis::risk_context::risk_note;
use crate::errors::EngineError;
use crate::models::{ConflictInfo, MatrixEntry, Recommendation, TrendSnapshot};

/// Compose the final recommendation. Nothing is reclassified here.
///
/// Fails with `Assembly` when BTC, BTC.D or the weekly cycle is missing from
/// the snapshot. A missing monthly cycle is fine: `conflict` is then
/// `NotApplicable` and the neutral note for the combination is used.
pub fn assemble(
    snapshot: &TrendSnapshot,
    entry: &MatrixEntry,
    conflict: &ConflictInfo,
    confidence: u8,
    now: DateTime<Utc>,
) -> Result<Recommendation, EngineError> {
    let key = snapshot.decision_key()?;

    let risk_context = if conflict.is_conflict() {
        conflict.warning()
    } else {
        risk_note(&key).to_string()
    };

    Ok(Recommendation {
        text: entry.text.to_string(),
        risk_level: entry.risk,
        confidence,
        risk_context,
        generated_at: now,
    })
}
