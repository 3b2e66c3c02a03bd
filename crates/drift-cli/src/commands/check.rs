//! Check command implementation

use std::path::{Path, PathBuf};

use colored::Colorize;

use drift_core::{Driver, NullReporter, RunConfig};
use drift_git::GitProvider;
use drift_manifest::{Lockfile, Manifest};

use crate::error::Result;
use crate::interactive::ConsoleConfirm;
use crate::reporter::ConsoleReporter;

/// Options for one `drift check` invocation.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Path to the dependency manifest
    pub manifest: PathBuf,
    /// Path to the lockfile
    pub lock: PathBuf,
    /// Checkout root; defaults to `<cwd>/vendor` when unset
    pub root: Option<PathBuf>,
    /// Enable the remediation workflow
    pub update: bool,
    /// Emit the run report as JSON instead of per-line output
    pub json: bool,
}

/// Run the check command
pub fn run_check(cwd: &Path, opts: CheckOptions) -> Result<()> {
    let vendor_root = opts
        .root
        .unwrap_or_else(|| cwd.join("vendor"));

    if !opts.json {
        println!(
            "{} {}",
            "Vendor root:".dimmed(),
            vendor_root.display()
        );
    }

    let manifest = Manifest::load(&cwd.join(&opts.manifest))?;
    let lockfile = Lockfile::load(&cwd.join(&opts.lock))?;

    let config = RunConfig {
        vendor_root,
        remediate: opts.update,
    };

    let provider = GitProvider::new();
    let mut confirm = ConsoleConfirm;
    let mut driver = Driver::new(config, &provider, &mut confirm);

    let report = if opts.json {
        let report = driver.run(&manifest, &lockfile, &mut NullReporter)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        report
    } else {
        driver.run(&manifest, &lockfile, &mut ConsoleReporter)?
    };

    if !opts.json && !report.is_clean() {
        println!(
            "{} of {} checked dependencies drifted",
            report.drift_count(),
            report.outcomes.len()
        );
    }

    // Drift is reported, not treated as process failure.
    Ok(())
}
