//! Local-state classification for a single dependency.

use std::path::Path;

use serde::{Deserialize, Serialize};

use drift_git::VcsProvider;

use crate::scope::CheckedDependency;

/// Local state of one dependency's checkout relative to its pin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "state")]
pub enum Classification {
    /// Local revision equals the pinned reference
    Matched,
    /// Local revision differs from the pinned reference
    Mismatched {
        /// The revision currently checked out
        local: String,
    },
    /// No repository (or no revision) exists at the expected location
    Missing,
    /// The repository exists but could not be opened
    OpenFailed {
        /// Underlying failure detail
        message: String,
    },
}

impl Classification {
    /// Whether this state calls for remediation.
    pub fn is_drift(&self) -> bool {
        matches!(self, Classification::Missing | Classification::Mismatched { .. })
    }
}

/// Classify one dependency's on-disk state.
///
/// Strictly per-dependency: the result never depends on any other
/// dependency's state. A repository that cannot be opened for a reason
/// other than absence is reported as [`Classification::OpenFailed`] and
/// never aborts the run.
pub fn classify(
    vcs: &dyn VcsProvider,
    path: &Path,
    dep: &CheckedDependency,
) -> Classification {
    let repo = match vcs.open(path) {
        Ok(repo) => repo,
        Err(e) if e.is_absent() => {
            tracing::debug!(name = %dep.name, "no checkout on disk");
            return Classification::Missing;
        }
        Err(e) => {
            tracing::warn!(name = %dep.name, error = %e, "could not open repository");
            return Classification::OpenFailed {
                message: e.to_string(),
            };
        }
    };

    let local = match repo.current_revision() {
        Ok(revision) => revision,
        Err(e) => {
            tracing::debug!(name = %dep.name, error = %e, "no current revision");
            return Classification::Missing;
        }
    };

    if local == dep.reference {
        Classification::Matched
    } else {
        Classification::Mismatched { local }
    }
}
