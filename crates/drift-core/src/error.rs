//! Error types for drift-core

/// Result type for drift-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in drift-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The lockfile was generated from different manifest content
    #[error(
        "Lockfile is out of date: manifest hash {actual} does not match locked hash {expected}. \
         Re-resolve dependencies to regenerate the lock"
    )]
    StaleLock { expected: String, actual: String },

    /// A remediation step failed for one dependency
    #[error("Remediation of '{name}' failed: {source}")]
    Remediation {
        name: String,
        source: drift_git::Error,
    },

    /// Manifest or lockfile error from drift-manifest
    #[error(transparent)]
    Manifest(#[from] drift_manifest::Error),

    /// Version-control error from drift-git
    #[error(transparent)]
    Vcs(#[from] drift_git::Error),
}
