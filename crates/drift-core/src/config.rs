//! Run configuration for a single check run.

use std::path::PathBuf;

/// Immutable configuration for one check run.
///
/// Constructed once by the caller and passed into the [`crate::Driver`];
/// nothing in the pipeline mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Root directory holding one checkout per dependency name
    pub vendor_root: PathBuf,
    /// Whether drifted dependencies may be re-fetched and re-pinned
    pub remediate: bool,
}

impl RunConfig {
    /// The expected on-disk location for a dependency's checkout.
    ///
    /// Pure function of the vendor root and the dependency name; the name
    /// is an import path whose segments become subdirectories.
    pub fn repo_path_for(&self, name: &str) -> PathBuf {
        let mut path = self.vendor_root.clone();
        for segment in name.split('/') {
            path.push(segment);
        }
        path
    }

    /// Build a config with remediation disabled.
    pub fn check_only(vendor_root: impl Into<PathBuf>) -> Self {
        Self {
            vendor_root: vendor_root.into(),
            remediate: false,
        }
    }
}
