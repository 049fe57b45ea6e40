//! Error types for profile-core

use std::path::{Path, PathBuf};

/// Result type for profile-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while walking, merging, or dumping profiles
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Any filesystem failure other than a tolerated missing file
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed profile file content
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: profile_formats::Error,
    },

    /// A profile inherits from itself through its `parent` chain
    #[error("Profile inheritance cycle at {path}")]
    InheritanceCycle { path: PathBuf },

    /// A file name received facts of two different shapes
    #[error("{file} holds {existing} entries, cannot merge {incoming} entries into it")]
    CategoryMismatch {
        file: String,
        existing: &'static str,
        incoming: &'static str,
    },

    /// A plain variable cannot be written inside double quotes
    #[error("Value of {key} in {file} contains a double quote")]
    QuoteInValue { file: String, key: String },

    /// Settings file could not be parsed
    #[error("Invalid settings at {path}: {message}")]
    Settings { path: PathBuf, message: String },

    /// Advisory lock on an output file could not be taken
    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach the offending file to a parser error.
    ///
    /// Read failures surfaced by a parser stay I/O errors.
    pub fn parse(path: &Path, source: profile_formats::Error) -> Self {
        match source {
            profile_formats::Error::Io(e) => Self::io(path, e),
            source => Self::Parse {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}
