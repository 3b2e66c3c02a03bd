//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// depdrift - Verify local dependency checkouts against the lockfile
#[derive(Parser, Debug)]
#[command(name = "drift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check local dependency checkouts against the pinned lockfile
    ///
    /// Reports one line per checked dependency. Drift (a missing or
    /// mismatched checkout) is reported but does not fail the process;
    /// only a stale lock or a load failure does.
    Check {
        /// Path to the dependency manifest
        #[arg(long, default_value = "deps.yaml")]
        manifest: PathBuf,

        /// Path to the lockfile
        #[arg(long, default_value = "deps.lock")]
        lock: PathBuf,

        /// Root directory holding dependency checkouts
        #[arg(long, env = "DRIFT_VENDOR_ROOT")]
        root: Option<PathBuf>,

        /// Re-fetch and re-pin drifted checkouts (asks per dependency)
        #[arg(short, long)]
        update: bool,

        /// Output the run report as JSON
        #[arg(long)]
        json: bool,
    },
}
