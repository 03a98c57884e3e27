//! Frequency ranking

use rustc_hash::FxHashMap;

/// A word and the number of times it occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub word: String,
    pub count: usize,
}

/// Count words and return the `top` most frequent, most frequent first
///
/// Ties keep the order in which the words were first encountered.
///
/// # Examples
/// ```
/// use noun_hangman::analysis::rank_by_frequency;
///
/// let ranked = rank_by_frequency(["castle", "garden", "garden"], 10);
/// assert_eq!(ranked[0].word, "garden");
/// assert_eq!(ranked[0].count, 2);
/// ```
pub fn rank_by_frequency<'a, I>(words: I, top: usize) -> Vec<RankedWord>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut first_seen: Vec<&str> = Vec::new();

    for word in words {
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            first_seen.push(word);
        }
        *count += 1;
    }

    // Stable sort keeps first-seen order among equal counts
    first_seen.sort_by(|a, b| counts[b].cmp(&counts[a]));
    first_seen.truncate(top);

    first_seen
        .into_iter()
        .map(|word| RankedWord {
            word: word.to_string(),
            count: counts[word],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(ranked: &[RankedWord]) -> Vec<(&str, usize)> {
        ranked.iter().map(|r| (r.word.as_str(), r.count)).collect()
    }

    #[test]
    fn ranks_by_descending_count() {
        let ranked = rank_by_frequency(
            ["window", "garden", "castle", "garden", "castle", "garden"],
            10,
        );
        assert_eq!(
            pairs(&ranked),
            vec![("garden", 3), ("castle", 2), ("window", 1)]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let ranked = rank_by_frequency(["window", "garden", "castle", "castle", "garden"], 10);
        assert_eq!(
            pairs(&ranked),
            vec![("garden", 2), ("castle", 2), ("window", 1)]
        );
    }

    #[test]
    fn truncates_to_top() {
        let ranked = rank_by_frequency(["aaaaaa", "bbbbbb", "cccccc", "aaaaaa"], 2);
        assert_eq!(pairs(&ranked), vec![("aaaaaa", 2), ("bbbbbb", 1)]);
    }

    #[test]
    fn empty_input() {
        assert!(rank_by_frequency(std::iter::empty(), 50).is_empty());
    }
}
