// src/core/report/rank_table.rs
use std::fmt::Write as _;

use super::ReportHeader;
use crate::models::RankEntry;

/// Renders the rank/frequency table as comma separated values.
#[must_use]
pub fn render_rank_table(header: &ReportHeader<'_>, entries: &[RankEntry]) -> String {
    let mut out = String::new();
    header.write_to(&mut out);

    out.push('\n');
    let _ = writeln!(out, "{:>4},{:>10},{:>10}", "rank", "freq", "r*f");
    for entry in entries {
        let _ = writeln!(
            out,
            "{:>4},{:>10},{:>10}",
            entry.rank, entry.frequency, entry.product
        );
    }

    out
}
