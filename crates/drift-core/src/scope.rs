//! Scope reduction: intersect locked and declared dependencies.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use drift_manifest::{LockedDependency, ManifestDependency};

/// A dependency selected for local-state checking.
///
/// Member of the scope-reduced set; carries everything classification and
/// remediation need for one dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedDependency {
    /// Import path of the dependency
    pub name: String,
    /// Pinned revision from the lockfile
    pub reference: String,
    /// Explicit clone URL override, when one is declared
    pub repo: Option<String>,
}

impl CheckedDependency {
    /// The URL to fetch this dependency from.
    ///
    /// An explicit `repo` override wins; otherwise the name doubles as a
    /// host/path and the source lives at `https://<name>`.
    pub fn source_url(&self) -> String {
        match &self.repo {
            Some(url) => url.clone(),
            None => format!("https://{}", self.name),
        }
    }
}

/// Compute the subset of locked dependencies that are also declared.
///
/// Both inputs must already be deduplicated. Output order follows the lock
/// list. Lock entries with no manifest counterpart are dependencies of a
/// dependency, expected to live inside another package's own vendor tree;
/// checking them against the top-level checkout location would produce
/// false mismatches, so they are excluded.
pub fn reduce(
    locked: &[LockedDependency],
    declared: &[ManifestDependency],
) -> Vec<CheckedDependency> {
    let declared_by_name: HashMap<&str, &ManifestDependency> =
        declared.iter().map(|d| (d.name.as_str(), d)).collect();

    locked
        .iter()
        .filter_map(|lock| {
            let manifest = declared_by_name.get(lock.name.as_str())?;
            Some(CheckedDependency {
                name: lock.name.clone(),
                reference: lock.reference.clone(),
                repo: lock.repo.clone().or_else(|| manifest.repo.clone()),
            })
        })
        .collect()
}
