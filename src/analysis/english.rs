//! English language model
//!
//! Lemmas and part-of-speech tags come from the `nlprule` English tokenizer, whose binary
//! is fetched by the build script and compiled into the crate. The tokenizer is
//! deserialized once per process.

use super::{AnalysisError, Lemmatizer, PosTag, Tagger};
use nlprule::{Tokenizer, tokenizer_filename};
use std::sync::LazyLock;

static TOKENIZER_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/", tokenizer_filename!("en")));

static TOKENIZER: LazyLock<Result<Tokenizer, String>> = LazyLock::new(|| {
    let mut bytes = TOKENIZER_BYTES;
    Tokenizer::from_reader(&mut bytes).map_err(|e| e.to_string())
});

/// Tags of function-word classes; a word with any of these readings is never a noun
const CLOSED_CLASS_TAGS: &[&str] = &[
    "CC", "CD", "DT", "EX", "IN", "MD", "PDT", "POS", "PRP", "PRP$", "RP", "TO", "UH", "WDT",
    "WP", "WP$", "WRB",
];

/// One dictionary reading of a word
#[derive(Debug, Clone, PartialEq, Eq)]
struct Reading {
    lemma: String,
    pos: String,
}

impl Reading {
    fn is_noun(&self) -> bool {
        self.pos.starts_with("NN")
    }

    fn is_closed_class(&self) -> bool {
        CLOSED_CLASS_TAGS.contains(&self.pos.as_str())
    }
}

/// Lemmatizer and tagger backed by the embedded `nlprule` English tokenizer
#[derive(Clone, Copy)]
pub struct EnglishModel {
    tokenizer: &'static Tokenizer,
}

impl EnglishModel {
    /// Load the embedded English tokenizer
    ///
    /// # Errors
    /// Returns `AnalysisError::Model` if the embedded binary cannot be deserialized.
    pub fn load() -> Result<Self, AnalysisError> {
        match &*TOKENIZER {
            Ok(tokenizer) => Ok(Self { tokenizer }),
            Err(e) => Err(AnalysisError::Model(e.clone())),
        }
    }

    /// Every reading the model reports for `word` analysed on its own
    fn readings(&self, word: &str) -> Vec<Reading> {
        let mut readings = Vec::new();
        for sentence in self.tokenizer.pipe(word) {
            for token in sentence.tokens() {
                if token.word().text().as_str().trim().is_empty() {
                    continue;
                }
                for data in token.word().tags() {
                    let pos = data.pos().as_str();
                    if pos.is_empty() || pos.starts_with("SENT_") {
                        continue;
                    }
                    readings.push(Reading {
                        lemma: data.lemma().as_str().to_lowercase(),
                        pos: pos.to_string(),
                    });
                }
            }
        }
        readings
    }
}

impl Lemmatizer for EnglishModel {
    fn lemmatize(&self, word: &str) -> String {
        self.readings(word)
            .into_iter()
            .find(|reading| reading.is_noun() && !reading.lemma.is_empty())
            .map_or_else(|| word.to_string(), |reading| reading.lemma)
    }
}

impl Tagger for EnglishModel {
    /// Function-word readings win over noun readings, noun readings over the rest
    fn tag(&self, word: &str) -> PosTag {
        let readings = self.readings(word);
        readings
            .iter()
            .find(|reading| reading.is_closed_class())
            .or_else(|| readings.iter().find(|reading| reading.is_noun()))
            .or_else(|| readings.first())
            .map_or_else(PosTag::unknown, |reading| PosTag::new(reading.pos.as_str()))
    }
}
