//! Terminal implementation of the core `Console` port.
//!
//! Notices become `✓ ⚠ ℹ` lines through [`OutputManager`]; confirmations
//! are `dialoguer` prompts when the `interactive` feature is enabled.

use vimkit_core::{
    application::{ApplicationError, Console, Notice},
    error::VimkitResult,
};

use crate::output::OutputManager;

pub struct TerminalConsole {
    output: OutputManager,
}

impl TerminalConsole {
    pub fn new(output: OutputManager) -> Self {
        Self { output }
    }
}

impl Console for TerminalConsole {
    fn confirm(&self, question: &str) -> VimkitResult<bool> {
        prompt(question)
    }

    fn notify(&self, notice: Notice) {
        // JSON runs print one document at the end.
        if self.output.is_json() {
            return;
        }
        let line = notice.to_string();
        let written = match notice {
            Notice::Written { .. } | Notice::Completed { .. } => self.output.success(&line),
            Notice::Skipped { .. } => self.output.info(&line),
            Notice::Declined { .. } => self.output.warning(&line),
        };
        if let Err(e) = written {
            tracing::debug!(error = %e, "failed to print notice");
        }
    }
}

#[cfg(feature = "interactive")]
fn prompt(question: &str) -> VimkitResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(question)
        .default(true)
        .interact()
        .map_err(|e| {
            ApplicationError::PromptFailed {
                reason: e.to_string(),
            }
            .into()
        })
}

#[cfg(not(feature = "interactive"))]
fn prompt(question: &str) -> VimkitResult<bool> {
    Err(ApplicationError::PromptFailed {
        reason: format!("cannot ask '{question}': built without the interactive feature"),
    }
    .into())
}
