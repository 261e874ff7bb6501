//! Error types for site-core

/// Result type for site-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in site-core operations.
///
/// These abort an operation before any mutation, or report a failed
/// filesystem step. Subprocess failures are not errors; they are recorded as
/// failed steps in a [`crate::PipelineReport`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File name is empty, has path separators, or is a dot segment
    #[error("Invalid file name: {name:?}")]
    InvalidFileName { name: String },

    /// Resolved path lies outside the content root
    #[error("Path {path} resolves outside the content root")]
    OutsideRoot { path: String },

    /// Article to delete does not exist
    #[error("File not found: {path}")]
    ArticleNotFound { path: String },

    /// Only markdown articles may be deleted
    #[error("Can only delete markdown files (.md or .mdx), got: {path}")]
    NotMarkdown { path: String },

    /// Search directory does not exist
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Filesystem error from site-fs
    #[error(transparent)]
    Fs(#[from] site_fs::Error),

    /// Subprocess error from site-git
    #[error(transparent)]
    Git(#[from] site_git::Error),
}
