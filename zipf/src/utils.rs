// src/utils.rs
use std::borrow::Cow;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::ZipfError;

/// Path of a report for `input`: the input's name without its last
/// extension, placed in `output_dir` with the given extension.
///
/// # Errors
///
/// Returns `ZipfError::Usage` if `input` has no file name.
pub fn report_path(input: &Path, output_dir: &Path, extension: &str) -> Result<PathBuf, ZipfError> {
    let stem = input.file_stem().ok_or_else(|| {
        ZipfError::Usage(format!("{} does not name a file", input.display()))
    })?;
    let mut file_name = stem.to_os_string();
    file_name.push(".");
    file_name.push(extension);
    Ok(output_dir.join(file_name))
}

/// The input's file name as shown in report headers.
#[must_use]
pub fn display_file_name(input: &Path) -> Cow<'_, str> {
    input
        .file_name()
        .map_or_else(|| input.to_string_lossy(), |name| name.to_string_lossy())
}

/// Asks for an input file name and reads the answer from `reader`.
///
/// # Errors
///
/// This function may return an error if:
/// * The prompt cannot be written or the answer cannot be read
/// * The answer is empty
pub fn prompt_for_path<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<PathBuf, ZipfError> {
    let console = PathBuf::from("<stdin>");
    write!(writer, "Enter a file name: ")
        .and_then(|()| writer.flush())
        .map_err(|source| ZipfError::Read {
            path: console.clone(),
            source,
        })?;

    let mut answer = String::new();
    reader
        .read_line(&mut answer)
        .map_err(|source| ZipfError::Read { path: console, source })?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Err(ZipfError::Usage(String::from("no input file name given")));
    }
    Ok(PathBuf::from(answer))
}
