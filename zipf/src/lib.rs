// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, init_logging, run, run_with_console};
pub use config::{ReportConfig, load_config};
pub use crate::core::analyzer::{Analysis, analyze_file};
pub use crate::core::counter::{count_words, count_words_in_file, tokenize_line};
pub use crate::core::ranker::rank_frequencies;
pub use crate::core::report::{ReportHeader, render_rank_table, render_word_list};
pub use error::ZipfError;
pub use models::{FrequencyGroups, Rank, RankEntry, WordCount};
