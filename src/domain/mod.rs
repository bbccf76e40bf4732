// Domain types and value objects
pub mod candle;
pub mod horizon;
pub mod risk;
pub mod trend;

// Re-export commonly used types
pub use candle::Candle;
pub use horizon::TrendHorizon;
pub use risk::RiskLevel;
pub use trend::TrendLabel;
