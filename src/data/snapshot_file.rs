use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::SNAPSHOT_VERSION;
use crate::engine::AnalysisRequest;
use crate::utils::time_utils::epoch_ms_to_iso;

/// Serialized input snapshot: the series of every horizon, as JSON.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SnapshotFile {
    pub version: f64,
    pub timestamp_ms: i64,
    pub data: AnalysisRequest,
}

impl SnapshotFile {
    pub fn new(data: AnalysisRequest) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            timestamp_ms: Utc::now().timestamp_millis(),
            data,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open snapshot file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let snapshot: SnapshotFile = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to deserialize snapshot: {}", path.display()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            log::warn!(
                "Snapshot {} has version {}, expected {}",
                path.display(),
                snapshot.version,
                SNAPSHOT_VERSION
            );
        }
        log::info!(
            "Loaded snapshot {} (taken {})",
            path.display(),
            epoch_ms_to_iso(snapshot.timestamp_ms)
        );
        Ok(snapshot)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .with_context(|| format!("Failed to serialize snapshot to: {}", path.display()))
    }
}
