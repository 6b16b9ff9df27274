// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while reading input, loading configuration or writing reports.
#[derive(Debug, Error)]
pub enum ZipfError {
    #[error("Failed to open file: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file: {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Failed to read config file: {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file: {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl ZipfError {
    /// The file the failure refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Open { path, .. }
            | Self::Read { path, .. }
            | Self::Create { path, .. }
            | Self::ConfigRead { path, .. }
            | Self::ConfigParse { path, .. } => Some(path),
            Self::Usage(_) | Self::InvalidConfig(_) => None,
        }
    }
}
