//! Lemmatization

/// Maps a lowercase word to its lemma
///
/// Words with no noun reading are returned unchanged.
pub trait Lemmatizer: Sync {
    fn lemmatize(&self, word: &str) -> String;
}
