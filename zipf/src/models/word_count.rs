// src/models/word_count.rs
use std::collections::HashMap;

/// Occurrence count per normalized word, plus the number of tokens seen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCount {
    counts: HashMap<String, u64>,
    total: u64,
}

impl WordCount {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`.
    #[inline]
    pub fn record(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count = count.saturating_add(1);
        } else {
            self.counts.insert(word.to_owned(), 1);
        }
        self.total = self.total.saturating_add(1);
    }

    /// Total number of tokens, repeats included.
    #[inline]
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words.
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(word, count)` pairs in no particular order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

impl<'a> FromIterator<&'a str> for WordCount {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut word_count = Self::new();
        for word in iter {
            word_count.record(word);
        }
        word_count
    }
}
