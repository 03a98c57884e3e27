//! Noun Hangman
//!
//! A letter-guessing game whose word pool is the most frequent nouns of a text.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use noun_hangman::analysis::{Analyzer, AnalyzerConfig};
//! use noun_hangman::game::{GameConfig, RandomPicker, Session};
//!
//! let text = std::fs::read_to_string("story.txt").unwrap();
//! let analyzer = Analyzer::english(AnalyzerConfig::default()).unwrap();
//! let analysis = analyzer.rank_candidate_nouns(&text);
//! let candidates = analysis.candidates().unwrap();
//!
//! let mut session = Session::new(candidates, RandomPicker::seeded(7), &GameConfig::default());
//! session.guess("e");
//! println!("{} (score {})", session.round().pattern(), session.score());
//! ```

// Core domain types
pub mod core;

// Text analysis pipeline
pub mod analysis;

// Embedded lexical tables
pub mod wordlists;

// Game engine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
