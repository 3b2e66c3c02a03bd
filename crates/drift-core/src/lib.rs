//! Drift-detection pipeline for depdrift
//!
//! Verifies that locally checked-out dependency repositories match the
//! revisions pinned in the lockfile:
//!
//! - **Consistency gate**: the lock must have been generated from the
//!   current manifest content (hash comparison).
//! - **Scope reduction**: only dependencies declared in the manifest are
//!   checked; transitive-only lock entries are excluded.
//! - **Classification**: each checked dependency's on-disk state is
//!   `Matched`, `Mismatched`, `Missing`, or an open failure.
//! - **Remediation**: on drift, optionally re-fetch and re-pin the
//!   checkout behind an interactive confirmation gate.
//!
//! # Architecture
//!
//! `drift-core` sits above the leaf crates and below the CLI:
//!
//! ```text
//!          CLI
//!           |
//!       drift-core
//!           |
//!     +-----+------+
//!     |            |
//! drift-manifest drift-git
//! ```

pub mod classify;
pub mod config;
pub mod driver;
pub mod error;
pub mod gate;
pub mod remediate;
pub mod report;
pub mod scope;

pub use classify::{classify, Classification};
pub use config::RunConfig;
pub use driver::Driver;
pub use error::{Error, Result};
pub use remediate::{ConfirmPrompt, RemediationOutcome, Remediator};
pub use report::{DependencyOutcome, NullReporter, Reporter, RunReport};
pub use scope::{reduce, CheckedDependency};
