//! Error types for site-git

/// Result type for site-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in site-git operations.
///
/// A command that runs and exits nonzero is not an error; see
/// [`crate::CommandOutput::success`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot run an empty command")]
    EmptyCommand,

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),
}
