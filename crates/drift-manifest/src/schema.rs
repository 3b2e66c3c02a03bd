//! Dependency record types shared by the manifest and the lockfile.

use serde::{Deserialize, Serialize};

/// A dependency as declared in the manifest.
///
/// `name` is the import path identifying the dependency (for example
/// `github.com/user/project`). Names are not guaranteed unique within the
/// raw declared list; uniqueness is established by [`crate::dedupe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDependency {
    /// Import path of the dependency
    pub name: String,
    /// Version constraint as written by the author
    pub constraint: String,
    /// Explicit clone URL, when the source does not live at `https://<name>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

/// A dependency as resolved in the lockfile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedDependency {
    /// Import path of the dependency
    pub name: String,
    /// Exact pinned revision (commit hash or tag)
    pub reference: String,
    /// Explicit clone URL, when the source does not live at `https://<name>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

/// Trait for records that carry a dependency name and a pin value.
///
/// Implemented by manifest entries (pin = constraint) and lock entries
/// (pin = reference) so deduplication can treat both lists uniformly.
pub trait PinnedEntry {
    /// Returns the dependency name
    fn name(&self) -> &str;

    /// Returns the pin value attached to this entry
    fn pin(&self) -> &str;
}

impl PinnedEntry for ManifestDependency {
    fn name(&self) -> &str {
        &self.name
    }

    fn pin(&self) -> &str {
        &self.constraint
    }
}

impl PinnedEntry for LockedDependency {
    fn name(&self) -> &str {
        &self.name
    }

    fn pin(&self) -> &str {
        &self.reference
    }
}
