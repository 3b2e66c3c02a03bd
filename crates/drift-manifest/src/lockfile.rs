//! The lockfile: machine-resolved exact revisions tied to a manifest hash.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::schema::LockedDependency;
use crate::{Error, Result};

/// The machine-generated record of exact resolved revisions.
///
/// Loaded from `deps.lock`. `hash` is the manifest content hash recorded
/// when the lock was generated; it ties the lock to a specific manifest
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lockfile {
    /// Manifest content hash at resolution time
    #[serde(default)]
    pub hash: String,
    /// Resolved primary dependencies
    #[serde(default)]
    pub imports: Vec<LockedDependency>,
    /// Resolved development-only dependencies
    #[serde(default)]
    pub dev_imports: Vec<LockedDependency>,
}

impl Lockfile {
    /// Load a lockfile from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let lockfile: Lockfile = serde_yaml::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            imports = lockfile.imports.len(),
            dev_imports = lockfile.dev_imports.len(),
            "loaded lockfile"
        );
        Ok(lockfile)
    }

    /// All locked dependencies, primary then development.
    pub fn all(&self) -> Vec<LockedDependency> {
        self.imports
            .iter()
            .chain(self.dev_imports.iter())
            .cloned()
            .collect()
    }
}
