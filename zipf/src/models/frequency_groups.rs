// src/models/frequency_groups.rs
use std::collections::{BTreeMap, BTreeSet};

use super::WordCount;

/// Distinct words keyed by the number of times they occur.
///
/// Groups iterate from the highest count down; words inside a group
/// iterate alphabetically.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyGroups {
    groups: BTreeMap<u64, BTreeSet<String>>,
}

impl FrequencyGroups {
    /// Inverts a word count so every word lands in the group for its count.
    #[must_use]
    pub fn from_word_count(word_count: &WordCount) -> Self {
        let mut groups: BTreeMap<u64, BTreeSet<String>> = BTreeMap::new();
        for (word, count) in word_count.iter() {
            groups.entry(count).or_default().insert(word.to_owned());
        }
        Self { groups }
    }

    /// Groups in descending count order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &BTreeSet<String>)> {
        self.groups.iter().rev().map(|(count, words)| (*count, words))
    }

    #[must_use]
    pub fn get(&self, count: u64) -> Option<&BTreeSet<String>> {
        self.groups.get(&count)
    }

    /// Number of distinct frequency values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of words across all groups.
    #[must_use]
    pub fn word_total(&self) -> usize {
        self.groups.values().map(BTreeSet::len).sum()
    }
}
