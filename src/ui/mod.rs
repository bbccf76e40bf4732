// Presentation: console rendering of analysis reports
pub mod report;

pub use report::render_text;
