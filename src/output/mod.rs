//! Terminal output formatting
//!
//! Display utilities for analysis diagnostics.

pub mod display;
pub mod formatters;

pub use display::print_analysis_result;
