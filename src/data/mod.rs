// Input adapters: snapshot files and collector text output
pub mod collector_output;
pub mod snapshot_file;

pub use collector_output::{load_collector_file, parse_collector_output};
pub use snapshot_file::SnapshotFile;
