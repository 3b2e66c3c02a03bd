//! Remediation: re-fetch and re-pin a drifted dependency.

use std::path::Path;

use serde::{Deserialize, Serialize};

use drift_git::VcsProvider;

use crate::scope::CheckedDependency;
use crate::{Error, Result};

/// Answers the per-dependency update confirmation.
///
/// Injected so the interactive prompt can be replaced by a scripted
/// answer in tests and non-interactive runs.
pub trait ConfirmPrompt {
    /// Returns `true` when the user approves updating `name`.
    fn confirm_update(&mut self, name: &str) -> bool;
}

/// Result of one remediation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "result")]
pub enum RemediationOutcome {
    /// The checkout was re-fetched and pinned to the locked reference
    Updated,
    /// The user declined; nothing was touched
    Declined,
    /// A remediation step failed; the checkout may be partial
    Failed {
        /// Failure detail
        message: String,
    },
}

/// Re-fetches and re-pins drifted dependency checkouts.
pub struct Remediator<'a> {
    vcs: &'a dyn VcsProvider,
    confirm: &'a mut dyn ConfirmPrompt,
}

impl<'a> Remediator<'a> {
    /// Create a remediator over the given provider and confirmation gate.
    pub fn new(vcs: &'a dyn VcsProvider, confirm: &'a mut dyn ConfirmPrompt) -> Self {
        Self { vcs, confirm }
    }

    /// Bring one dependency's checkout back to its pinned reference.
    ///
    /// Asks for confirmation first; a declined answer is a no-op success.
    /// Otherwise removes any existing checkout, clones the source fresh
    /// and checks out the exact pinned reference. A failing step yields
    /// [`Error::Remediation`]; the caller continues with the next
    /// dependency.
    pub fn remediate(
        &mut self,
        dep: &CheckedDependency,
        path: &Path,
    ) -> Result<RemediationOutcome> {
        if !self.confirm.confirm_update(&dep.name) {
            tracing::debug!(name = %dep.name, "update declined");
            return Ok(RemediationOutcome::Declined);
        }

        let step = |e: drift_git::Error| Error::Remediation {
            name: dep.name.clone(),
            source: e,
        };

        self.vcs.remove(path).map_err(step)?;
        let repo = self.vcs.create(&dep.source_url(), path).map_err(step)?;
        repo.checkout(&dep.reference).map_err(step)?;

        tracing::debug!(name = %dep.name, reference = %dep.reference, "checkout updated");
        Ok(RemediationOutcome::Updated)
    }
}
