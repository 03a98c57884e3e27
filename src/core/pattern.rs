//! Revealed-letter pattern for a guessing round
//!
//! A pattern holds one slot per letter of the target word. Each slot is either
//! hidden (rendered as the placeholder `_`) or shows the letter once it has been guessed.
//!
//! Slots only ever move from hidden to revealed; nothing hides a letter again.

use super::TargetWord;
use std::fmt;

/// Character rendered for a letter that has not been guessed yet
pub const PLACEHOLDER: char = '_';

/// Revealed/hidden state of every letter in a target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedPattern {
    slots: Vec<Option<char>>,
}

impl RevealedPattern {
    /// Create a fully hidden pattern for the given word
    #[must_use]
    pub fn hidden(word: &TargetWord) -> Self {
        Self {
            slots: vec![None; word.len()],
        }
    }

    /// Reveal every position of `letter` in `word`
    ///
    /// Returns the number of positions that matched. Revealing a letter twice is a no-op
    /// for the pattern but still reports the matching count.
    ///
    /// # Examples
    /// ```
    /// use noun_hangman::core::{RevealedPattern, TargetWord};
    ///
    /// let word = TargetWord::new("banana").unwrap();
    /// let mut pattern = RevealedPattern::hidden(&word);
    ///
    /// assert_eq!(pattern.reveal(&word, 'a'), 3);
    /// assert_eq!(pattern.compact(), "_a_a_a");
    /// ```
    pub fn reveal(&mut self, word: &TargetWord, letter: char) -> usize {
        let positions = word.positions_of(letter);
        for &i in positions {
            self.slots[i] = Some(letter);
        }
        positions.len()
    }

    /// Check whether every letter has been revealed
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.hidden_count() == 0
    }

    /// Number of letters still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Render without separators, e.g. `_a_a_a`
    #[must_use]
    pub fn compact(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER))
            .collect()
    }
}

impl fmt::Display for RevealedPattern {
    /// Renders slots separated by spaces, e.g. `_ a _ a _ a`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", slot.unwrap_or(PLACEHOLDER))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> TargetWord {
        TargetWord::new(text).unwrap()
    }

    #[test]
    fn hidden_pattern_is_all_placeholders() {
        let target = word("garden");
        let pattern = RevealedPattern::hidden(&target);

        assert_eq!(pattern.compact(), "______");
        assert_eq!(pattern.hidden_count(), 6);
        assert!(!pattern.is_complete());
    }

    #[test]
    fn reveal_marks_all_duplicate_positions() {
        let target = word("banana");
        let mut pattern = RevealedPattern::hidden(&target);

        assert_eq!(pattern.reveal(&target, 'n'), 2);
        assert_eq!(pattern.compact(), "__n_n_");
        assert_eq!(pattern.hidden_count(), 4);
    }

    #[test]
    fn reveal_missing_letter_changes_nothing() {
        let target = word("banana");
        let mut pattern = RevealedPattern::hidden(&target);

        assert_eq!(pattern.reveal(&target, 'z'), 0);
        assert_eq!(pattern.compact(), "______");
    }

    #[test]
    fn reveal_twice_is_idempotent() {
        let target = word("banana");
        let mut pattern = RevealedPattern::hidden(&target);

        pattern.reveal(&target, 'a');
        let once = pattern.clone();
        pattern.reveal(&target, 'a');

        assert_eq!(pattern, once);
    }

    #[test]
    fn pattern_complete_after_all_letters() {
        let target = word("banana");
        let mut pattern = RevealedPattern::hidden(&target);

        for letter in ['a', 'n', 'b'] {
            pattern.reveal(&target, letter);
        }

        assert!(pattern.is_complete());
        assert_eq!(pattern.hidden_count(), 0);
        assert_eq!(pattern.compact(), "banana");
    }

    #[test]
    fn display_separates_slots_with_spaces() {
        let target = word("banana");
        let mut pattern = RevealedPattern::hidden(&target);
        pattern.reveal(&target, 'a');

        assert_eq!(format!("{pattern}"), "_ a _ a _ a");
    }
}
