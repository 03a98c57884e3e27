//! Text analysis command
//!
//! Computes lexical diversity and ranks the candidate nouns of a text.

use crate::analysis::{Analysis, AnalysisError, Analyzer, Lemmatizer, Tagger, lexical_diversity};

/// Result of analyzing a text
pub struct AnalysisResult {
    pub lexical_diversity: f64,
    pub analysis: Analysis,
}

/// Analyze `text` with the given analyzer
///
/// # Errors
///
/// Returns `AnalysisError::NoTokens` if the text contains no tokens, before any ranking is done.
pub fn analyze_text<L: Lemmatizer, T: Tagger>(
    text: &str,
    analyzer: &Analyzer<L, T>,
) -> Result<AnalysisResult, AnalysisError> {
    let lexical_diversity = lexical_diversity(text)?;
    let analysis = analyzer.rank_candidate_nouns(text);

    log::debug!(
        "lexical diversity {lexical_diversity:.4}, {} ranked nouns",
        analysis.ranked.len()
    );

    Ok(AnalysisResult {
        lexical_diversity,
        analysis,
    })
}
