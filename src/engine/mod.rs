pub mod core;
pub mod messages;

// Re-export key components
pub use self::core::AdvisorEngine;
pub use messages::{AnalysisReport, AnalysisRequest};
