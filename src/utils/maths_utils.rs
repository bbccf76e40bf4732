/// Signed percentage change from `first` to `last`.
/// Returns `None` when `first` is zero or either value is not finite.
pub fn percent_change(first: f64, last: f64) -> Option<f64> {
    if !first.is_finite() || !last.is_finite() || first == 0.0 {
        return None;
    }
    Some((last - first) / first * 100.0)
}

/// Clamp a signed score into an inclusive `u8` band.
pub fn clamp_score(raw: i32, floor: u8, ceiling: u8) -> u8 {
    // Ceiling wins if the band is inverted; validation rejects that config anyway.
    raw.max(floor as i32).min(ceiling as i32) as u8
}
