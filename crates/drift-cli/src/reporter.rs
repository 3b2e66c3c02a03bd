//! Human-readable per-dependency output.

use colored::Colorize;

use drift_core::{Classification, DependencyOutcome, RemediationOutcome, Reporter};

/// Prints one colored line per checked dependency as outcomes arrive.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, outcome: &DependencyOutcome) {
        match &outcome.classification {
            Classification::Matched => {
                println!("{} {}", "[Ok]".green(), outcome.name);
            }
            Classification::Mismatched { local } => {
                println!(
                    "{} {} (reference: {}, local: {})",
                    "[Not Matched]".yellow(),
                    outcome.name.magenta(),
                    outcome.reference,
                    local
                );
            }
            Classification::Missing => {
                println!(
                    "{} {}: no local checkout",
                    "[Not Existed]".cyan(),
                    outcome.name.magenta()
                );
            }
            Classification::OpenFailed { message } => {
                println!(
                    "{} {}: {}",
                    "[Error]".red(),
                    outcome.name.magenta(),
                    message
                );
            }
        }

        match &outcome.remediation {
            Some(RemediationOutcome::Updated) => {
                println!(
                    "  {} re-pinned to {}",
                    "updated:".green(),
                    outcome.reference
                );
            }
            Some(RemediationOutcome::Declined) => {
                println!("  {} left unchanged", "skipped:".dimmed());
            }
            Some(RemediationOutcome::Failed { message }) => {
                println!("  {} {}", "update failed:".red(), message);
            }
            None => {}
        }
    }
}
