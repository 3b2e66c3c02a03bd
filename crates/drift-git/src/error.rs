//! Error types for drift-git

use std::path::PathBuf;

/// Result type for drift-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in drift-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No repository exists at the given path
    #[error("No repository at {path}")]
    Absent { path: PathBuf },

    /// The repository has no resolvable current revision
    #[error("No current revision: {message}")]
    NoRevision { message: String },

    /// Cloning the source into the target location failed
    #[error("Clone of {url} failed: {message}")]
    CloneFailed { url: String, message: String },

    /// Checking out the requested reference failed
    #[error("Checkout of '{reference}' failed: {message}")]
    CheckoutFailed { reference: String, message: String },

    /// Fetching from the remote failed
    #[error("Fetch failed: {message}")]
    FetchFailed { message: String },

    /// Underlying git error
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error means the repository does not exist on disk.
    pub fn is_absent(&self) -> bool {
        matches!(self, Error::Absent { .. })
    }
}
