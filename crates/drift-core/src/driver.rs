//! Orchestration of the drift-detection pipeline.

use drift_git::VcsProvider;
use drift_manifest::{dedupe, Lockfile, Manifest};

use crate::classify;
use crate::config::RunConfig;
use crate::gate;
use crate::remediate::{ConfirmPrompt, RemediationOutcome, Remediator};
use crate::report::{DependencyOutcome, Reporter, RunReport};
use crate::scope;
use crate::Result;

/// Drives a full check run: gate, dedupe, reduce, classify, remediate.
///
/// Dependencies are processed strictly one at a time in lock-list order.
/// Gate and dedup failures abort the run; everything inside the
/// per-dependency loop is recorded and reported, never fatal.
pub struct Driver<'a> {
    config: RunConfig,
    vcs: &'a dyn VcsProvider,
    confirm: &'a mut dyn ConfirmPrompt,
}

impl<'a> Driver<'a> {
    /// Create a driver for one run.
    pub fn new(
        config: RunConfig,
        vcs: &'a dyn VcsProvider,
        confirm: &'a mut dyn ConfirmPrompt,
    ) -> Self {
        Self {
            config,
            vcs,
            confirm,
        }
    }

    /// Run the pipeline over an already-loaded manifest and lockfile.
    ///
    /// Outcomes are handed to `reporter` as they are produced and
    /// collected into the returned [`RunReport`].
    pub fn run(
        &mut self,
        manifest: &Manifest,
        lockfile: &Lockfile,
        reporter: &mut dyn Reporter,
    ) -> Result<RunReport> {
        gate::validate(manifest, lockfile)?;

        let locked = dedupe(&lockfile.all())?;
        let declared = dedupe(&manifest.all())?;
        let checked = scope::reduce(&locked, &declared);
        tracing::debug!(count = checked.len(), "checking dependencies");

        let mut outcomes = Vec::with_capacity(checked.len());
        for dep in &checked {
            let path = self.config.repo_path_for(&dep.name);
            let classification = classify::classify(self.vcs, &path, dep);

            let remediation = if self.config.remediate && classification.is_drift() {
                let mut remediator = Remediator::new(self.vcs, &mut *self.confirm);
                match remediator.remediate(dep, &path) {
                    Ok(outcome) => Some(outcome),
                    Err(e) => {
                        tracing::warn!(name = %dep.name, error = %e, "remediation failed");
                        Some(RemediationOutcome::Failed {
                            message: e.to_string(),
                        })
                    }
                }
            } else {
                None
            };

            let outcome = DependencyOutcome {
                name: dep.name.clone(),
                reference: dep.reference.clone(),
                classification,
                remediation,
            };
            reporter.report(&outcome);
            outcomes.push(outcome);
        }

        let report = RunReport { outcomes };
        if report.is_clean() {
            tracing::debug!("all checked dependencies match their pins");
        } else {
            tracing::debug!(drifted = report.drift_count(), "drift detected");
        }
        Ok(report)
    }
}
