// src/models/rank_entry.rs
use std::fmt;

/// A rank that is either whole or falls halfway between two whole ranks.
///
/// Stored as a count of halves so tied ranks stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rank {
    halves: u64,
}

impl Rank {
    #[inline]
    #[must_use]
    pub const fn from_halves(halves: u64) -> Self {
        Self { halves }
    }

    #[inline]
    #[must_use]
    pub const fn whole(value: u64) -> Self {
        Self {
            halves: value.saturating_mul(2),
        }
    }

    #[inline]
    #[must_use]
    pub const fn halves(self) -> u64 {
        self.halves
    }

    #[inline]
    #[must_use]
    pub const fn is_whole(self) -> bool {
        self.halves % 2 == 0
    }

    #[inline]
    #[must_use]
    pub const fn scale(self, factor: u64) -> Self {
        Self {
            halves: self.halves.saturating_mul(factor),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fraction = if self.is_whole() { "0" } else { "5" };
        let text = format!("{}.{fraction}", self.halves() / 2);
        f.pad(&text)
    }
}

/// One row of the rank/frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankEntry {
    pub rank: Rank,
    pub frequency: u64,
    pub product: Rank,
}

impl RankEntry {
    #[inline]
    #[must_use]
    pub const fn new(rank: Rank, frequency: u64) -> Self {
        Self {
            rank,
            frequency,
            product: rank.scale(frequency),
        }
    }
}
