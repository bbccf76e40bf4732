//! Configuration module for the cycle advisor.

pub mod analysis;

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod validate;

// Re-export commonly used items
pub use analysis::{ANALYSIS, AnalysisConfig, ConfidenceSettings, HorizonSettings};
pub use persistence::{DEMO_SNAPSHOT_PATH, SNAPSHOT_VERSION};
pub use validate::validate_config;

use anyhow::{Context, Result};
use std::path::Path;

/// Load an `AnalysisConfig` from a JSON file and validate it.
///
/// Top-level sections missing from the file keep their `ANALYSIS` defaults;
/// a section that is present must be complete.
pub fn load_config(path: &Path) -> Result<AnalysisConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: AnalysisConfig = serde_json::from_str(&contents)
        .with_context(|| format!("parsing {}", path.display()))?;

    validate_config(&config)?;
    log::info!("Loaded analysis config from {}", path.display());
    Ok(config)
}
