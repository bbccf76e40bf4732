// Trend classification and decision logic
pub mod confidence_scorer;
pub mod conflict_detector;
pub mod decision_matrix;
pub mod recommendation_assembler;
pub mod risk_context;
pub mod trend_classifier;

// Re-export commonly used functions
pub use confidence_scorer::score;
pub use conflict_detector::{detect_conflict, detect_snapshot_conflict};
pub use decision_matrix::{DECISION_MATRIX, lookup, lookup_key};
pub use recommendation_assembler::assemble;
pub use trend_classifier::{classify, classify_with};
