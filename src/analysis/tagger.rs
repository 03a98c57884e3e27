//! Part-of-speech tags
//!
//! Tags use the Penn Treebank names reported by the language model (`NN`, `NNS`, `VBD`, ...).

use rayon::prelude::*;
use std::fmt;

/// Penn Treebank part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PosTag(String);

impl PosTag {
    /// Tag given to words the model has no reading for
    pub const UNKNOWN: &'static str = "UNK";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self::new(Self::UNKNOWN)
    }

    /// Penn Treebank code, e.g. `NN`
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }

    /// True for every `NN*` tag
    #[inline]
    #[must_use]
    pub fn is_noun(&self) -> bool {
        self.0.starts_with("NN")
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A word paired with its tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub word: String,
    pub tag: PosTag,
}

/// Assigns a part-of-speech tag to a single lowercase word
pub trait Tagger: Sync {
    fn tag(&self, word: &str) -> PosTag;

    /// Tag every word in parallel, keeping input order
    fn tag_all(&self, words: &[String]) -> Vec<TaggedWord> {
        words
            .par_iter()
            .map(|word| TaggedWord {
                word: word.clone(),
                tag: self.tag(word),
            })
            .collect()
    }
}
