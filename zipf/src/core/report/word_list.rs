// src/core/report/word_list.rs
use std::fmt::Write as _;

use super::ReportHeader;
use crate::models::FrequencyGroups;

fn group_label(frequency: u64) -> String {
    if frequency == 1 {
        String::from("Words occurring once:")
    } else {
        format!("Words occurring {frequency} times:")
    }
}

/// Renders the word-frequency report.
///
/// Each frequency group gets a labelled section listing its words
/// alphabetically, `batch_size` words per line in columns `column_width`
/// characters wide.
#[must_use]
pub fn render_word_list(
    header: &ReportHeader<'_>,
    groups: &FrequencyGroups,
    batch_size: usize,
    column_width: usize,
) -> String {
    let batch_size = batch_size.max(1);
    let mut out = String::new();
    header.write_to(&mut out);

    for (frequency, words) in groups.iter() {
        out.push('\n');
        out.push_str(&group_label(frequency));
        out.push('\n');

        let words: Vec<&String> = words.iter().collect();
        for batch in words.chunks(batch_size) {
            let mut line = String::new();
            for word in batch {
                let _ = write!(line, "{word:<column_width$}");
                // keep columns apart when a word fills its column
                if word.len() >= column_width {
                    line.push(' ');
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    out
}
