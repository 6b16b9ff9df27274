// src/core/ranker.rs
use crate::models::{FrequencyGroups, Rank, RankEntry};

/// Assigns a rank to every frequency group, highest frequency first.
///
/// Words that share a frequency share the mean of the positions they would
/// take if listed one by one: with `n` positions already taken by more
/// frequent words and `k` words in the group, the rank is `n + (k + 1) / 2`.
#[must_use]
pub fn rank_frequencies(groups: &FrequencyGroups) -> Vec<RankEntry> {
    let mut consumed: u64 = 0;
    let mut entries = Vec::with_capacity(groups.len());

    for (frequency, words) in groups.iter() {
        let tied = u64::try_from(words.len()).unwrap_or(u64::MAX);
        // 2 * (n + (k + 1) / 2) = 2n + k + 1
        let halves = consumed
            .saturating_mul(2)
            .saturating_add(tied)
            .saturating_add(1);
        entries.push(RankEntry::new(Rank::from_halves(halves), frequency));
        consumed = consumed.saturating_add(tied);
    }

    entries
}
