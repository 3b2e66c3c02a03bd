//! Error types for drift-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the checking core
    #[error(transparent)]
    Core(#[from] drift_core::Error),

    /// Error loading the manifest or lockfile
    #[error(transparent)]
    Manifest(#[from] drift_manifest::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error for `--json` output
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
