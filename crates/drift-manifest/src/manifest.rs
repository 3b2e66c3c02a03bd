//! The dependency manifest: author-declared dependencies and constraints.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::schema::ManifestDependency;
use crate::{Error, Result};

/// Prefix for manifest content hashes
const HASH_PREFIX: &str = "sha256:";

/// The human-authored declaration of desired dependencies.
///
/// Loaded from `deps.yaml`. Primary and development dependencies are kept
/// as separate lists in the file but are merged for checking purposes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Primary dependencies
    #[serde(default)]
    pub imports: Vec<ManifestDependency>,
    /// Development-only dependencies
    #[serde(default)]
    pub dev_imports: Vec<ManifestDependency>,
}

impl Manifest {
    /// Load a manifest from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let manifest: Manifest = serde_yaml::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            imports = manifest.imports.len(),
            dev_imports = manifest.dev_imports.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// All declared dependencies, primary then development.
    pub fn all(&self) -> Vec<ManifestDependency> {
        self.imports
            .iter()
            .chain(self.dev_imports.iter())
            .cloned()
            .collect()
    }

    /// Compute the integrity hash over the declared dependency content.
    ///
    /// The hash covers each dependency's name and constraint in declared
    /// order, primary before development, in the canonical
    /// `"sha256:<hex>"` form. It is deterministic and changes whenever
    /// the declared dependency content changes.
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        for dep in self.imports.iter().chain(self.dev_imports.iter()) {
            hasher.update(dep.name.as_bytes());
            hasher.update(b"=");
            hasher.update(dep.constraint.as_bytes());
            hasher.update(b"\n");
        }
        format!("{}{:x}", HASH_PREFIX, hasher.finalize())
    }
}
