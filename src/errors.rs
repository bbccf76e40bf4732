use thiserror::Error;

use crate::domain::TrendHorizon;

/// Typed error hierarchy for the advisor engine.
///
/// Library code returns these directly; the binary wraps them with
/// `anyhow::Context` for reporting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    // -- Classification -----------------------------------------------------
    #[error("{horizon}: need at least {required} samples, got {found}")]
    IncompleteData {
        horizon: TrendHorizon,
        required: usize,
        found: usize,
    },

    #[error("{horizon}: gap of {gap_hours:.1}h after sample {index} (max {max_gap_hours:.1}h)")]
    TimestampDiscontinuity {
        horizon: TrendHorizon,
        index: usize,
        gap_hours: f64,
        max_gap_hours: f64,
    },

    #[error("{horizon}: invalid reference value {value} at sample {index}")]
    InvalidSample {
        horizon: TrendHorizon,
        index: usize,
        value: f64,
    },

    // -- Assembly -----------------------------------------------------------
    #[error("missing mandatory trend(s): {missing}")]
    Assembly { missing: String },

    // -- Input --------------------------------------------------------------
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    // -- Configuration ------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// Stable taxonomy code, printed in front of the message by the binary.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::IncompleteData { .. } => "INCOMPLETE_DATA",
            EngineError::TimestampDiscontinuity { .. } => "TIMESTAMP_DISCONTINUITY",
            EngineError::InvalidSample { .. } => "INVALID_SAMPLE",
            EngineError::Assembly { .. } => "ASSEMBLY_ERROR",
            EngineError::Parse { .. } => "PARSE_ERROR",
            EngineError::Config(_) => "CONFIG_ERROR",
        }
    }
}
