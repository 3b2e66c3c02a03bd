//! depdrift CLI
//!
//! The command-line interface for checking local dependency checkouts
//! against the pinned lockfile.

mod cli;
mod commands;
mod error;
mod interactive;
mod reporter;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::CheckOptions;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Check {
            manifest,
            lock,
            root,
            update,
            json,
        }) => {
            let cwd = std::env::current_dir()?;
            commands::run_check(
                &cwd,
                CheckOptions {
                    manifest,
                    lock,
                    root,
                    update,
                    json,
                },
            )
        }
        None => {
            println!("{} depdrift", "drift".green().bold());
            println!();
            println!("Run {} for available commands.", "drift --help".cyan());
            Ok(())
        }
    }
}
