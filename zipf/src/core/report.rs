// src/core/report.rs
mod rank_table;
mod word_list;

pub use rank_table::render_rank_table;
pub use word_list::render_word_list;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::ZipfError;

/// Totals shown at the top of both reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportHeader<'a> {
    pub file_name: &'a str,
    pub total_words: u64,
    pub distinct_words: usize,
}

impl ReportHeader<'_> {
    pub(crate) fn write_to(&self, out: &mut String) {
        out.push_str("Zipf's Law: rank * freq = const\n");
        out.push_str("-------------------------------\n");
        let _ = writeln!(out, "File:           {}", self.file_name);
        let _ = writeln!(out, "Total words:    {}", self.total_words);
        let _ = writeln!(out, "Distinct words: {}", self.distinct_words);
    }
}

/// Writes a fully rendered report to `path`.
///
/// # Errors
///
/// Returns `ZipfError::Create` if the file cannot be created or written.
pub fn write_report(path: &Path, contents: &str) -> Result<(), ZipfError> {
    fs::write(path, contents).map_err(|source| ZipfError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote report");
    Ok(())
}
