//! Lexical tables for text analysis
//!
//! Provides the embedded stopword list and a hashed lookup over it.

mod embedded;

pub use embedded::{STOPWORDS, STOPWORDS_COUNT};

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

static STOPWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Check whether a lowercase token is an English stopword
#[inline]
#[must_use]
pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}
