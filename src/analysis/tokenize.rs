//! Tokenization and token filtering
//!
//! Tokens are Unicode word-boundary segments with whitespace dropped, so punctuation
//! marks survive as tokens of their own.

use super::{AnalysisError, AnalyzerConfig};
use crate::wordlists::is_stopword;
use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Split text into word and punctuation tokens, preserving case
///
/// # Examples
/// ```
/// use noun_hangman::analysis::tokenize;
///
/// assert_eq!(tokenize("Hello, world!"), vec!["Hello", ",", "world", "!"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_word_bounds()
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// Ratio of distinct tokens to total tokens
///
/// Tokens are compared case-sensitively, punctuation included.
///
/// # Errors
///
/// Returns `AnalysisError::NoTokens` if the text contains no tokens at all.
pub fn lexical_diversity(text: &str) -> Result<f64, AnalysisError> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Err(AnalysisError::NoTokens);
    }

    let unique: FxHashSet<&str> = tokens.iter().copied().collect();
    Ok(unique.len() as f64 / tokens.len() as f64)
}

/// Lowercase, tokenize and keep only long alphabetic non-stopword tokens
///
/// Order of appearance is preserved; duplicates are kept so they can be counted.
#[must_use]
pub fn filter_tokens(text: &str, config: &AnalyzerConfig) -> Vec<String> {
    let lowered = text.to_lowercase();
    tokenize(&lowered)
        .into_iter()
        .filter(|token| is_content_word(token, config.min_length))
        .map(str::to_owned)
        .collect()
}

/// Alphabetic, longer than `min_length` characters, and not a stopword
#[must_use]
pub fn is_content_word(token: &str, min_length: usize) -> bool {
    token.chars().count() > min_length
        && token.chars().all(char::is_alphabetic)
        && !is_stopword(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_punctuation() {
        let tokens = tokenize("The cat sat. The cat ran!");
        assert_eq!(
            tokens,
            vec!["The", "cat", "sat", ".", "The", "cat", "ran", "!"]
        );
    }

    #[test]
    fn tokenize_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn tokenize_keeps_contractions_together() {
        assert_eq!(tokenize("don't stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn lexical_diversity_ratio() {
        // 8 tokens, 6 distinct: The, cat, sat, ., ran, !
        let diversity = lexical_diversity("The cat sat. The cat ran!").unwrap();
        assert!((diversity - 0.75).abs() < 1e-9);
    }

    #[test]
    fn lexical_diversity_all_unique() {
        let diversity = lexical_diversity("alpha beta gamma").unwrap();
        assert!((diversity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn lexical_diversity_is_case_sensitive() {
        let diversity = lexical_diversity("Garden garden").unwrap();
        assert!((diversity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn lexical_diversity_empty_text_errors() {
        assert_eq!(lexical_diversity(""), Err(AnalysisError::NoTokens));
        assert_eq!(lexical_diversity("  \n "), Err(AnalysisError::NoTokens));
    }

    #[test]
    fn filter_tokens_applies_all_rules() {
        let config = AnalyzerConfig::default();
        let tokens = filter_tokens(
            "The Gardens behind the castle, and 42 gardens; yourselves wandered about.",
            &config,
        );

        // "yourselves" is a stopword, "about" is too short, "42" is not alphabetic
        assert_eq!(
            tokens,
            vec!["gardens", "behind", "castle", "gardens", "wandered"]
        );
    }

    #[test]
    fn filter_tokens_respects_min_length() {
        let config = AnalyzerConfig {
            min_length: 7,
            ..AnalyzerConfig::default()
        };
        let tokens = filter_tokens("castle kingdoms monastery", &config);
        assert_eq!(tokens, vec!["kingdoms", "monastery"]);
    }

    #[test]
    fn content_word_rules() {
        assert!(is_content_word("garden", 5));
        assert!(!is_content_word("tree", 5));
        assert!(!is_content_word("gard3ns", 5));
        assert!(!is_content_word("yourselves", 5));
        assert!(!is_content_word("well-being", 5));
    }
}
