//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit first/last sample and window details for every classified horizon.
    pub print_trend_details: bool,
    /// Emit the decision key and the matrix entry it resolved to.
    pub print_matrix_lookups: bool,
    /// Emit each CLI/config override as it is applied.
    pub print_config_overrides: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_trend_details: false,
    print_matrix_lookups: false,
    print_config_overrides: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_off_by_default() {
        assert!(!DEBUG_FLAGS.print_trend_details);
        assert!(!DEBUG_FLAGS.print_matrix_lookups);
        assert!(!DEBUG_FLAGS.print_config_overrides);
    }
}
