//! Per-dependency outcomes and the run-level report.

use serde::{Deserialize, Serialize};

use crate::classify::Classification;
use crate::remediate::RemediationOutcome;

/// Everything recorded about one checked dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyOutcome {
    /// Import path of the dependency
    pub name: String,
    /// Pinned reference from the lockfile
    pub reference: String,
    /// Local-state classification
    pub classification: Classification,
    /// Remediation result, when remediation was attempted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<RemediationOutcome>,
}

/// Ordered outcomes for a whole check run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunReport {
    /// One outcome per checked dependency, in lock-list order
    pub outcomes: Vec<DependencyOutcome>,
}

impl RunReport {
    /// Returns `true` when every checked dependency matched its pin.
    pub fn is_clean(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| o.classification == Classification::Matched)
    }

    /// Number of dependencies with drift (missing or mismatched).
    pub fn drift_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.classification.is_drift())
            .count()
    }
}

/// Receives outcomes as the driver produces them.
///
/// Owns all human-facing formatting; the pipeline itself never prints.
pub trait Reporter {
    /// Called once per checked dependency, in order.
    fn report(&mut self, outcome: &DependencyOutcome);
}

/// Reporter that discards everything. Used for JSON output and tests.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _outcome: &DependencyOutcome) {}
}
