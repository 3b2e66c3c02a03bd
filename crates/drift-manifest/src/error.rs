//! Error types for drift-manifest

use std::path::PathBuf;

/// Result type for drift-manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or normalizing dependency lists
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Dependency file missing at the expected location
    #[error("Dependency file not found at {path}")]
    NotFound { path: PathBuf },

    /// Two entries declare the same dependency with different pins
    #[error("Conflicting entries for dependency '{name}': pins differ")]
    PinConflict { name: String },

    /// YAML parse or serialize error
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
