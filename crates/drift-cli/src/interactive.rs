//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for the per-dependency update confirmation.

use dialoguer::Confirm;

use drift_core::ConfirmPrompt;

/// Terminal yes/no gate asked before each remediation.
///
/// Anything other than an explicit yes (including a prompt failure on a
/// non-interactive terminal) counts as a decline.
#[derive(Debug, Default)]
pub struct ConsoleConfirm;

impl ConfirmPrompt for ConsoleConfirm {
    fn confirm_update(&mut self, name: &str) -> bool {
        match Confirm::new()
            .with_prompt(format!("Update the checkout of {name}?"))
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "confirmation prompt failed, skipping");
                false
            }
        }
    }
}
