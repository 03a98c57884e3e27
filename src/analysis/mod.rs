//! Text analysis pipeline
//!
//! Turns raw text into a ranked list of candidate nouns:
//!
//! 1. Lowercase, tokenize, and keep long alphabetic non-stopword tokens
//! 2. Lemmatize every kept token
//! 3. Tag the distinct lemmas and keep the nouns
//! 4. Count kept tokens by lemma and rank the nouns by frequency
//!
//! Lemmas and tags come from the embedded English model ([`EnglishModel`]); other back ends
//! plug in through the [`Lemmatizer`] and [`Tagger`] traits.

mod english;
mod frequency;
mod lemma;
mod tagger;
mod tokenize;

pub use english::EnglishModel;
pub use frequency::{RankedWord, rank_by_frequency};
pub use lemma::Lemmatizer;
pub use tagger::{PosTag, TaggedWord, Tagger};
pub use tokenize::{filter_tokens, is_content_word, lexical_diversity, tokenize};

use crate::core::{CandidateError, CandidateList};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Thresholds for candidate selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Words must be strictly longer than this many characters
    pub min_length: usize,
    /// Maximum number of candidates kept
    pub top: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_length: 5,
            top: 50,
        }
    }
}

/// Error type for text analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    NoTokens,
    /// The embedded language model could not be loaded
    Model(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTokens => write!(f, "Text contains no tokens to analyze"),
            Self::Model(reason) => write!(f, "Cannot load the English language model: {reason}"),
        }
    }
}

impl std::error::Error for AnalysisError {}

/// Result of ranking the nouns of a text
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Number of tokens that passed the content-word filter
    pub filtered_tokens: usize,
    /// Every distinct lemma with its tag, in first-seen order
    pub tagged: Vec<TaggedWord>,
    /// Number of distinct lemmas tagged as nouns
    pub noun_count: usize,
    /// Most frequent nouns, most frequent first
    pub ranked: Vec<RankedWord>,
}

impl Analysis {
    /// Build the game's word pool from the ranked nouns
    ///
    /// # Errors
    /// Returns `CandidateError::Empty` if no noun survived filtering.
    pub fn candidates(&self) -> Result<CandidateList, CandidateError> {
        CandidateList::new(self.ranked.iter().map(|r| r.word.clone()).collect())
    }
}

/// Noun-ranking pipeline over a lemmatizer and a tagger
pub struct Analyzer<L: Lemmatizer, T: Tagger> {
    lemmatizer: L,
    tagger: T,
    config: AnalyzerConfig,
}

impl Analyzer<EnglishModel, EnglishModel> {
    /// Analyzer using the embedded English model for both lemmas and tags
    ///
    /// # Errors
    /// Returns `AnalysisError::Model` if the model cannot be loaded.
    pub fn english(config: AnalyzerConfig) -> Result<Self, AnalysisError> {
        let model = EnglishModel::load()?;
        Ok(Self::new(model, model, config))
    }
}

impl<L: Lemmatizer, T: Tagger> Analyzer<L, T> {
    pub const fn new(lemmatizer: L, tagger: T, config: AnalyzerConfig) -> Self {
        Self {
            lemmatizer,
            tagger,
            config,
        }
    }

    /// Rank the most frequent nouns of `text`
    ///
    /// Each kept token is counted under its lemma. A lemma only becomes a candidate if it is
    /// tagged as a noun and still satisfies the content-word rules after lemmatization.
    ///
    /// # Examples
    /// ```
    /// use noun_hangman::analysis::{Analyzer, AnalyzerConfig};
    ///
    /// let analysis = Analyzer::english(AnalyzerConfig::default())
    ///     .unwrap()
    ///     .rank_candidate_nouns("The gardens were lovely. A garden needs water and patience.");
    ///
    /// assert_eq!(analysis.ranked[0].word, "garden");
    /// assert_eq!(analysis.ranked[0].count, 2);
    /// ```
    #[must_use]
    pub fn rank_candidate_nouns(&self, text: &str) -> Analysis {
        let tokens = filter_tokens(text, &self.config);
        log::debug!("{} tokens passed the content-word filter", tokens.len());

        let mut lemma_cache: FxHashMap<&str, String> = FxHashMap::default();
        let mut token_lemmas: Vec<String> = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let lemma = lemma_cache
                .entry(token.as_str())
                .or_insert_with(|| self.lemmatizer.lemmatize(token));
            token_lemmas.push(lemma.clone());
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let distinct: Vec<String> = token_lemmas
            .iter()
            .filter(|lemma| seen.insert(lemma.as_str()))
            .cloned()
            .collect();

        let tagged = self.tagger.tag_all(&distinct);

        let nouns: FxHashSet<&str> = tagged
            .iter()
            .filter(|t| t.tag.is_noun())
            .map(|t| t.word.as_str())
            .collect();
        log::debug!("{} distinct lemmas, {} nouns", distinct.len(), nouns.len());

        let ranked = rank_by_frequency(
            token_lemmas.iter().map(String::as_str).filter(|lemma| {
                nouns.contains(lemma) && is_content_word(lemma, self.config.min_length)
            }),
            self.config.top,
        );

        Analysis {
            filtered_tokens: tokens.len(),
            noun_count: nouns.len(),
            tagged,
            ranked,
        }
    }
}
