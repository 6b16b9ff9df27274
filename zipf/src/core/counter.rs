// src/core/counter.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::ZipfError;
use crate::models::WordCount;

const APOSTROPHE: u8 = b'\'';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteClass {
    Letter,
    Apostrophe,
    Separator,
}

const fn classify(byte: u8) -> ByteClass {
    if byte.is_ascii_alphabetic() {
        ByteClass::Letter
    } else if byte == APOSTROPHE {
        ByteClass::Apostrophe
    } else {
        ByteClass::Separator
    }
}

/// Splits one line of text into lowercase words.
///
/// A word is a maximal run of ASCII letters and apostrophes with any
/// leading or trailing apostrophes removed. Runs made only of apostrophes
/// yield nothing.
pub fn tokenize_line(line: &[u8]) -> impl Iterator<Item = String> + '_ {
    line.split(|&byte| classify(byte) == ByteClass::Separator)
        .filter_map(|run| {
            let start = run.iter().position(|&byte| byte != APOSTROPHE)?;
            let end = run.iter().rposition(|&byte| byte != APOSTROPHE)?;
            run.get(start..=end)
        })
        .map(|word| {
            word.iter()
                .map(|&byte| char::from(byte.to_ascii_lowercase()))
                .collect()
        })
}

/// Counts every word read from `reader`, line by line.
///
/// # Errors
///
/// Returns the underlying I/O error if a line cannot be read.
pub fn count_words<R: BufRead>(mut reader: R) -> std::io::Result<WordCount> {
    let mut word_count = WordCount::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        for word in tokenize_line(&line) {
            word_count.record(&word);
        }
    }

    Ok(word_count)
}

/// Opens `path` and counts the words it contains.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be opened (`ZipfError::Open`)
/// * Reading fails part way through (`ZipfError::Read`)
pub fn count_words_in_file(path: &Path) -> Result<WordCount, ZipfError> {
    let file = File::open(path).map_err(|source| ZipfError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let word_count = count_words(BufReader::new(file)).map_err(|source| ZipfError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        total = word_count.total(),
        distinct = word_count.distinct(),
        "counted words"
    );
    Ok(word_count)
}
