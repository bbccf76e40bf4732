// Domain models for the advisor
// Pure data; the logic that produces them lives in `analysis`

pub mod recommendation;
pub mod sample_series;
pub mod snapshot;
pub mod trend_result;

// Re-export key types for convenience
pub use recommendation::{ConflictInfo, MatrixEntry, Recommendation};
pub use sample_series::{Sample, SampleSeries};
pub use snapshot::{DecisionKey, TrendSnapshot};
pub use trend_result::TrendResult;
