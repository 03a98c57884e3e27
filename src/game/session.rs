//! Guessing session state machine
//!
//! A session owns the candidate pool, the word picker, and the score. It runs a sequence of
//! rounds; each round guesses one target word letter by letter.
//!
//! State transitions on `guess`:
//! - exit signal → `UserExited`
//! - repeated letter → no change
//! - matching letter → reveal, score + 1, `RoundSolved` once nothing is hidden
//! - missing letter → score − 1, `SessionOver` once the score drops below zero
//!
//! After `SessionOver` or `UserExited` the session ignores further input.

use super::picker::WordPicker;
use crate::core::{CandidateList, RevealedPattern, TargetWord};
use rustc_hash::FxHashSet;

/// Input that ends the whole session
pub const EXIT_SIGNAL: &str = "!";

/// Session-wide settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub starting_score: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { starting_score: 5 }
    }
}

/// Where the session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Letters remain hidden and the score is non-negative
    AwaitingGuess,
    /// Every letter of the current word is revealed
    RoundSolved,
    /// The score dropped below zero
    SessionOver,
    /// The exit signal was received
    UserExited,
}

/// Result of processing a single line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the word; `revealed` positions were uncovered
    Right { revealed: usize },
    /// The letter does not occur in the word
    Wrong,
    /// The letter was already guessed this round
    Repeat,
    /// The input was not a single character
    Invalid,
    /// The exit signal was received
    Exited,
    /// The round or the whole session is already finished; input ignored
    Finished,
}

/// State of the word currently being guessed
#[derive(Debug, Clone)]
pub struct Round {
    target: TargetWord,
    pattern: RevealedPattern,
    guessed: FxHashSet<char>,
}

impl Round {
    fn new(target: TargetWord) -> Self {
        let pattern = RevealedPattern::hidden(&target);
        Self {
            target,
            pattern,
            guessed: FxHashSet::default(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &TargetWord {
        &self.target
    }

    #[must_use]
    pub const fn pattern(&self) -> &RevealedPattern {
        &self.pattern
    }

    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    #[must_use]
    pub fn guessed_count(&self) -> usize {
        self.guessed.len()
    }
}

/// One game session spanning any number of rounds
pub struct Session<P: WordPicker> {
    candidates: CandidateList,
    picker: P,
    score: i32,
    round: Round,
    state: SessionState,
    words_solved: usize,
}

impl<P: WordPicker> Session<P> {
    /// Start a session and pick the first target word
    ///
    /// # Panics
    /// Panics if the picker returns a word that is not lowercase alphabetic.
    /// `CandidateList` only holds such words.
    pub fn new(candidates: CandidateList, mut picker: P, config: &GameConfig) -> Self {
        let round = Self::start_round(&candidates, &mut picker);
        Self {
            candidates,
            picker,
            score: config.starting_score,
            round,
            state: SessionState::AwaitingGuess,
            words_solved: 0,
        }
    }

    fn start_round(candidates: &CandidateList, picker: &mut P) -> Round {
        let word = picker.pick(candidates);
        log::debug!("new round: target has {} letters", word.chars().count());
        let target =
            TargetWord::new(word).expect("candidate list only holds lowercase alphabetic words");
        Round::new(target)
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Number of words fully revealed so far
    #[inline]
    #[must_use]
    pub const fn words_solved(&self) -> usize {
        self.words_solved
    }

    /// Process one line of player input
    ///
    /// The input is trimmed and lowercased before comparison. Anything other than a
    /// single character (or the exit signal) is rejected without touching the score.
    ///
    /// # Examples
    /// ```
    /// use noun_hangman::core::CandidateList;
    /// use noun_hangman::game::{GameConfig, GuessOutcome, RandomPicker, Session};
    ///
    /// let candidates = CandidateList::new(vec!["banana".to_string()]).unwrap();
    /// let mut session = Session::new(candidates, RandomPicker::seeded(0), &GameConfig::default());
    ///
    /// assert_eq!(session.guess("A"), GuessOutcome::Right { revealed: 3 });
    /// assert_eq!(session.score(), 6);
    /// assert_eq!(session.round().pattern().compact(), "_a_a_a");
    /// ```
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        if self.state != SessionState::AwaitingGuess {
            return GuessOutcome::Finished;
        }

        let input = input.trim();
        if input == EXIT_SIGNAL {
            log::debug!("exit signal received with score {}", self.score);
            self.state = SessionState::UserExited;
            return GuessOutcome::Exited;
        }

        let normalized = input.to_lowercase();
        let mut chars = normalized.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return GuessOutcome::Invalid;
        };

        if self.round.has_guessed(letter) {
            return GuessOutcome::Repeat;
        }
        self.round.guessed.insert(letter);

        if self.round.target.has_letter(letter) {
            let revealed = self.round.pattern.reveal(&self.round.target, letter);
            self.score = self.score.saturating_add(1);
            if self.round.pattern.is_complete() {
                self.words_solved += 1;
                self.state = SessionState::RoundSolved;
                log::debug!(
                    "round solved after {} guesses, score {}",
                    self.round.guessed_count(),
                    self.score
                );
            } else {
                log::debug!(
                    "pattern {} with {} letters hidden",
                    self.round.pattern.compact(),
                    self.round.pattern.hidden_count()
                );
            }
            GuessOutcome::Right { revealed }
        } else {
            self.score = self.score.saturating_sub(1);
            if self.score < 0 {
                self.state = SessionState::SessionOver;
                log::debug!("score below zero after {} solved words", self.words_solved);
            }
            GuessOutcome::Wrong
        }
    }

    /// Start the next round after a solved word
    ///
    /// Returns `false` (and changes nothing) unless the current round is solved.
    pub fn next_round(&mut self) -> bool {
        if self.state != SessionState::RoundSolved || self.score < 0 {
            return false;
        }
        self.round = Self::start_round(&self.candidates, &mut self.picker);
        self.state = SessionState::AwaitingGuess;
        true
    }
}
