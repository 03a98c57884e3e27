//! Target word representation
//!
//! A `TargetWord` stores a lowercase alphabetic word along with letter position indices
//! so a guessed letter can be revealed in a single lookup.

use rustc_hash::FxHashMap;
use std::fmt;

/// A word chosen as the target of a guessing round
///
/// Stores the word as characters and maintains a map of letter positions for repeated letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    letters: Vec<char>,
    letter_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacters => write!(f, "Word must contain only alphabetic characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl TargetWord {
    /// Create a new target word from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty or contains non-alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use noun_hangman::core::TargetWord;
    ///
    /// let word = TargetWord::new("Banana").unwrap();
    /// assert_eq!(word.text(), "banana");
    ///
    /// assert!(TargetWord::new("").is_err());
    /// assert!(TargetWord::new("ban4na").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: Vec<char> = text.chars().collect();

        let mut letter_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in letters.iter().enumerate() {
            letter_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            letter_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = TargetWord::new("banana").unwrap();
        assert_eq!(word.text(), "banana");
        assert_eq!(word.len(), 6);
        assert_eq!(word.positions_of('b'), &[0]);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = TargetWord::new("GARDEN").unwrap();
        assert_eq!(word.text(), "garden");

        let word2 = TargetWord::new("GaRdEn").unwrap();
        assert_eq!(word2.text(), "garden");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(TargetWord::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(TargetWord::new("gard3n"), Err(WordError::InvalidCharacters));
        assert!(TargetWord::new("gar den").is_err());
        assert!(TargetWord::new("garden!").is_err());
        assert!(TargetWord::new("don't").is_err());
    }

    #[test]
    fn word_creation_accepts_non_ascii_letters() {
        let word = TargetWord::new("Château").unwrap();
        assert_eq!(word.text(), "château");
        assert!(word.has_letter('â'));
    }

    #[test]
    fn word_has_letter() {
        let word = TargetWord::new("garden").unwrap();
        assert!(word.has_letter('g'));
        assert!(word.has_letter('n'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = TargetWord::new("banana").unwrap();
        assert_eq!(word.positions_of('a'), &[1, 3, 5]);
        assert_eq!(word.positions_of('n'), &[2, 4]);
        assert_eq!(word.positions_of('b'), &[0]);
        assert_eq!(word.positions_of('z'), &[] as &[usize]);
    }

    #[test]
    fn word_display() {
        let word = TargetWord::new("garden").unwrap();
        assert_eq!(format!("{word}"), "garden");
    }
}
