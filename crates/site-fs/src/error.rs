//! Error types for site-fs

use std::path::PathBuf;

/// Result type for site-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in site-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Content root {path} does not exist")]
    RootNotFound { path: PathBuf },

    #[error("Content root {path} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

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
}
