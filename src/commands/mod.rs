//! Command implementations

pub mod analyze;
pub mod play;

pub use analyze::{AnalysisResult, analyze_text};
pub use play::run_play;
