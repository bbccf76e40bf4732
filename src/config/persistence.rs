//! File persistence and serialization configuration

/// Default location of the snapshot written by `make_demo_snapshot`
pub const DEMO_SNAPSHOT_PATH: &str = "snapshots/demo_snapshot.json";

/// Current version of the snapshot file format
pub const SNAPSHOT_VERSION: f64 = 1.0;
