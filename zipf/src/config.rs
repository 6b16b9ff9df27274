// src/config.rs
mod loader;

pub use loader::{CONFIG_FILE_NAME, find_config_file, load_config, load_config_file};

use serde::Deserialize;

use crate::error::ZipfError;

/// Presentation settings for the two reports.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Words per line in the word-frequency report.
    pub batch_size: usize,
    /// Column width each word is padded to.
    pub column_width: usize,
    /// Extension of the word-frequency report.
    pub word_extension: String,
    /// Extension of the rank/frequency report.
    pub rank_extension: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            batch_size: 5,
            column_width: 16,
            word_extension: String::from("wrd"),
            rank_extension: String::from("csv"),
        }
    }
}

impl ReportConfig {
    /// Applies command-line overrides on top of the loaded values.
    #[must_use]
    pub fn with_overrides(mut self, batch_size: Option<usize>, column_width: Option<usize>) -> Self {
        if let Some(batch_size) = batch_size {
            self.batch_size = batch_size;
        }
        if let Some(column_width) = column_width {
            self.column_width = column_width;
        }
        self
    }

    /// # Errors
    ///
    /// Returns `ZipfError::InvalidConfig` if a width or batch size is zero, or
    /// if an extension is empty or contains a path separator.
    pub fn validate(&self) -> Result<(), ZipfError> {
        if self.batch_size == 0 {
            return Err(ZipfError::InvalidConfig(String::from(
                "batch_size must be at least 1",
            )));
        }
        if self.column_width == 0 {
            return Err(ZipfError::InvalidConfig(String::from(
                "column_width must be at least 1",
            )));
        }
        for (name, extension) in [
            ("word_extension", &self.word_extension),
            ("rank_extension", &self.rank_extension),
        ] {
            if extension.is_empty() || extension.contains(['/', '\\']) {
                return Err(ZipfError::InvalidConfig(format!(
                    "{name} must be a plain file extension, got {extension:?}"
                )));
            }
        }
        if self.word_extension == self.rank_extension {
            return Err(ZipfError::InvalidConfig(String::from(
                "word_extension and rank_extension must differ",
            )));
        }
        Ok(())
    }
}
