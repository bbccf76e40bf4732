use crate::domain::TrendLabel;
use crate::models::{ConflictInfo, TrendSnapshot};

/// Compare the weekly (MWC) and monthly (HWC) cycle labels.
///
/// Any mismatch is a conflict, not only opposite directions: Bearish against
/// Sideways counts. Without a monthly label no conflict is possible.
pub fn detect_conflict(weekly: TrendLabel, monthly: Option<TrendLabel>) -> ConflictInfo {
    match monthly {
        None => ConflictInfo::NotApplicable,
        Some(monthly) if monthly == weekly => ConflictInfo::Aligned { weekly, monthly },
        Some(monthly) => ConflictInfo::Conflict { weekly, monthly },
    }
}

/// Snapshot convenience; a snapshot without a weekly cycle has nothing to compare.
pub fn detect_snapshot_conflict(snapshot: &TrendSnapshot) -> ConflictInfo {
    match &snapshot.weekly_cycle {
        Some(weekly) => detect_conflict(weekly.label, snapshot.monthly_cycle.map(|m| m.label)),
        None => ConflictInfo::NotApplicable,
    }
}
