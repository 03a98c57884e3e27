//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable in isolation.

mod candidates;
mod pattern;
mod word;

pub use candidates::{CandidateError, CandidateList};
pub use pattern::{PLACEHOLDER, RevealedPattern};
pub use word::{TargetWord, WordError};
