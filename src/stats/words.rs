//! Word frequency statistics

use std::collections::HashMap;

use crate::core::error::StatsError;
use crate::core::model::{frequency_order, WordCount};
use crate::stats::normalize::normalize_word;

/// Ingest words one at a time, report an ordered frequency table on demand
pub trait WordsStatistics {
    /// Count one word. `None` stands for an absent word and is rejected
    /// without touching the counts.
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError>;

    /// Snapshot of all counts, by count descending then word ascending
    fn statistics(&self) -> Vec<WordCount>;
}

/// [`WordsStatistics`] backed by a hash map from normalized word to count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStatistics {
    counts: HashMap<String, usize>,
}

impl WordStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a word that is known to be present
    pub fn add(&mut self, word: &str) {
        match normalize_word(word) {
            Some(key) => *self.counts.entry(key).or_insert(0) += 1,
            None => tracing::trace!("skipping blank word"),
        }
    }

    /// Number of distinct normalized words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Count for the key `word` normalizes to (0 for blank or unseen words)
    pub fn count_of(&self, word: &str) -> usize {
        normalize_word(word)
            .and_then(|key| self.counts.get(&key).copied())
            .unwrap_or(0)
    }

    /// Fold another instance's counts into this one
    pub fn merge(&mut self, other: WordStatistics) {
        if self.counts.is_empty() {
            self.counts = other.counts;
            return;
        }
        for (word, count) in other.counts {
            *self.counts.entry(word).or_insert(0) += count;
        }
    }
}

impl WordsStatistics for WordStatistics {
    fn add_word(&mut self, word: Option<&str>) -> Result<(), StatsError> {
        let word = word.ok_or(StatsError::InvalidArgument { name: "word" })?;
        self.add(word);
        Ok(())
    }

    fn statistics(&self) -> Vec<WordCount> {
        let mut entries: Vec<WordCount> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.clone(), count).into())
            .collect();
        entries.sort_unstable_by(frequency_order);
        entries
    }
}

impl<'a> Extend<&'a str> for WordStatistics {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, iter: T) {
        for word in iter {
            self.add(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for WordStatistics {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_counts_normalized_key() {
        let mut stats = WordStatistics::new();
        stats.add("Hello");
        stats.add("HELLO");
        assert_eq!(stats.len(), 1);
        assert_eq!(stats.count_of("hello"), 2);
        assert_eq!(stats.count_of("hElLo"), 2);
    }

    #[test]
    fn test_add_word_none_leaves_counts() {
        let mut stats = WordStatistics::new();
        stats.add("a");
        let before = stats.clone();

        let err = stats.add_word(None).unwrap_err();
        assert_eq!(err, StatsError::InvalidArgument { name: "word" });
        assert_eq!(stats, before);

        // Still usable afterwards
        stats.add_word(Some("a")).unwrap();
        assert_eq!(stats.count_of("a"), 2);
    }

    #[test]
    fn test_count_of_blank_and_unseen() {
        let stats: WordStatistics = ["a"].into_iter().collect();
        assert_eq!(stats.count_of(""), 0);
        assert_eq!(stats.count_of("   "), 0);
        assert_eq!(stats.count_of("b"), 0);
    }

    #[test]
    fn test_total_and_len() {
        let stats: WordStatistics = ["a", "b", "a", " ", ""].into_iter().collect();
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.len(), 2);
        assert!(!stats.is_empty());
        assert!(WordStatistics::new().is_empty());
    }

    #[test]
    fn test_statistics_order() {
        let stats: WordStatistics = ["c", "b", "a", "b", "c", "c", "d"].into_iter().collect();
        assert_eq!(
            stats.statistics(),
            vec![
                WordCount::new("c", 3),
                WordCount::new("b", 2),
                WordCount::new("a", 1),
                WordCount::new("d", 1),
            ]
        );
    }

    #[test]
    fn test_statistics_is_a_snapshot() {
        let mut stats = WordStatistics::new();
        stats.add("a");
        let snapshot = stats.statistics();
        stats.add("a");
        stats.add("b");
        assert_eq!(snapshot, vec![WordCount::new("a", 1)]);
    }

    #[test]
    fn test_merge_adds_counts() {
        let mut left: WordStatistics = ["a", "b"].into_iter().collect();
        let right: WordStatistics = ["B", "c"].into_iter().collect();
        left.merge(right);
        assert_eq!(
            left.statistics(),
            vec![
                WordCount::new("b", 2),
                WordCount::new("a", 1),
                WordCount::new("c", 1),
            ]
        );
    }

    #[test]
    fn test_merge_into_empty() {
        let mut left = WordStatistics::new();
        left.merge(["x", "x"].into_iter().collect());
        assert_eq!(left.statistics(), vec![WordCount::new("x", 2)]);
    }

    #[test]
    fn test_merge_matches_single_instance() {
        let words = ["one", "Two", "two", "THREE", "three", "three"];
        let single: WordStatistics = words.into_iter().collect();

        let mut merged: WordStatistics = words[..3].iter().copied().collect();
        merged.merge(words[3..].iter().copied().collect());

        assert_eq!(merged.statistics(), single.statistics());
    }
}
