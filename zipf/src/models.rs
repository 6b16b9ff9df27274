// src/models.rs
mod frequency_groups;
mod rank_entry;
mod word_count;

pub use frequency_groups::FrequencyGroups;
pub use rank_entry::{Rank, RankEntry};
pub use word_count::WordCount;
