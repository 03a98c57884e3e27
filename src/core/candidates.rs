//! Candidate word pool for the guessing game

use std::fmt;

/// Ranked, non-empty list of words a round can pick its target from
///
/// Words are lowercase and alphabetic, most frequent first. The list is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    words: Vec<String>,
}

/// Error type for invalid candidate lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateError {
    Empty,
    InvalidWord(String),
}

impl fmt::Display for CandidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(
                f,
                "No candidate nouns survived filtering; the text is too short or too stopword-heavy to play"
            ),
            Self::InvalidWord(word) => {
                write!(f, "Candidate '{word}' must be lowercase and alphabetic")
            }
        }
    }
}

impl std::error::Error for CandidateError {}

impl CandidateList {
    /// Build a candidate list, keeping the given order
    ///
    /// # Errors
    /// Returns `CandidateError::Empty` for an empty list and `CandidateError::InvalidWord`
    /// for any word that is not entirely lowercase alphabetic.
    ///
    /// # Examples
    /// ```
    /// use noun_hangman::core::CandidateList;
    ///
    /// let list = CandidateList::new(vec!["garden".to_string()]).unwrap();
    /// assert_eq!(list.len(), 1);
    ///
    /// assert!(CandidateList::new(Vec::new()).is_err());
    /// ```
    pub fn new(words: Vec<String>) -> Result<Self, CandidateError> {
        if words.is_empty() {
            return Err(CandidateError::Empty);
        }

        if let Some(bad) = words.iter().find(|w| !is_candidate_shaped(w)) {
            return Err(CandidateError::InvalidWord(bad.clone()));
        }

        Ok(Self { words })
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_candidate_shaped(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_alphabetic() && !c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(words: &[&str]) -> Result<CandidateList, CandidateError> {
        CandidateList::new(words.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn candidate_list_keeps_order() {
        let candidates = list(&["garden", "window", "castle"]).unwrap();
        assert_eq!(candidates.as_slice(), &["garden", "window", "castle"]);
        assert_eq!(candidates.as_slice()[1], "window");
    }

    #[test]
    fn candidate_list_rejects_empty() {
        assert_eq!(list(&[]), Err(CandidateError::Empty));
    }

    #[test]
    fn candidate_list_rejects_malformed_words() {
        assert_eq!(
            list(&["garden", "Window"]),
            Err(CandidateError::InvalidWord("Window".to_string()))
        );
        assert!(list(&["gard3n"]).is_err());
        assert!(list(&[""]).is_err());
    }
}
