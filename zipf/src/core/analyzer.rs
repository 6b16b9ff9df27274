// src/core/analyzer.rs
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ReportConfig;
use crate::core::counter::count_words_in_file;
use crate::core::ranker::rank_frequencies;
use crate::core::report::{ReportHeader, render_rank_table, render_word_list, write_report};
use crate::error::ZipfError;
use crate::models::{FrequencyGroups, RankEntry, WordCount};
use crate::utils::{display_file_name, report_path};

/// Everything produced by one analysis run.
#[derive(Debug)]
pub struct Analysis {
    pub word_count: WordCount,
    pub groups: FrequencyGroups,
    pub ranks: Vec<RankEntry>,
    pub word_report: PathBuf,
    pub rank_report: PathBuf,
}

/// Counts the words in `input`, ranks them and writes both reports into
/// `output_dir`.
///
/// The word-frequency report is written first; if it fails the rank report
/// is not attempted.
///
/// # Errors
///
/// This function may return an error if:
/// * The input path has no file name (`ZipfError::Usage`)
/// * The input cannot be opened or read
/// * Either report cannot be created
pub fn analyze_file(
    input: &Path,
    output_dir: &Path,
    config: &ReportConfig,
) -> Result<Analysis, ZipfError> {
    let word_report = report_path(input, output_dir, &config.word_extension)?;
    let rank_report = report_path(input, output_dir, &config.rank_extension)?;

    let word_count = count_words_in_file(input)?;
    let groups = FrequencyGroups::from_word_count(&word_count);
    let ranks = rank_frequencies(&groups);
    debug!(groups = groups.len(), "ranked frequency groups");

    let file_name = display_file_name(input);
    let header = ReportHeader {
        file_name: &file_name,
        total_words: word_count.total(),
        distinct_words: word_count.distinct(),
    };

    let word_list = render_word_list(&header, &groups, config.batch_size, config.column_width);
    write_report(&word_report, &word_list)?;

    let rank_table = render_rank_table(&header, &ranks);
    write_report(&rank_report, &rank_table)?;

    Ok(Analysis {
        word_count,
        groups,
        ranks,
        word_report,
        rank_report,
    })
}
