//! Non-interactive consoles.
//!
//! The terminal console lives in the CLI crate; these two cover
//! `--yes`-style runs and tests that need to script the operator.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tracing::{debug, info};
use vimkit_core::{
    application::{ApplicationError, Console, Notice},
    error::VimkitResult,
};

/// Answers every question with a fixed value and logs notices.
#[derive(Debug, Clone, Copy)]
pub struct AutoConsole {
    answer: bool,
}

impl AutoConsole {
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }

    pub fn yes() -> Self {
        Self::new(true)
    }
}

impl Default for AutoConsole {
    fn default() -> Self {
        Self::yes()
    }
}

impl Console for AutoConsole {
    fn confirm(&self, question: &str) -> VimkitResult<bool> {
        debug!(question, answer = self.answer, "auto-answered prompt");
        Ok(self.answer)
    }

    fn notify(&self, notice: Notice) {
        info!("{notice}");
    }
}

#[derive(Debug, Default)]
struct Script {
    answers: VecDeque<bool>,
    questions: Vec<String>,
    notices: Vec<Notice>,
}

/// Replays canned answers in order and records everything it is told.
///
/// Clones share one script, so a test can keep a handle after boxing the
/// console into a service. Running out of answers is reported as a prompt
/// failure, the same way a closed terminal would be.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    script: Arc<Mutex<Script>>,
}

impl ScriptedConsole {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                answers: answers.into_iter().collect(),
                ..Script::default()
            })),
        }
    }

    /// Questions asked so far, in order.
    pub fn questions(&self) -> Vec<String> {
        self.script
            .lock()
            .map(|s| s.questions.clone())
            .unwrap_or_default()
    }

    /// Notices received so far, in order.
    pub fn notices(&self) -> Vec<Notice> {
        self.script
            .lock()
            .map(|s| s.notices.clone())
            .unwrap_or_default()
    }

    pub fn remaining_answers(&self) -> usize {
        self.script.lock().map(|s| s.answers.len()).unwrap_or(0)
    }
}

impl Console for ScriptedConsole {
    fn confirm(&self, question: &str) -> VimkitResult<bool> {
        let mut script = self
            .script
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned {
                name: "scripted console",
            })?;
        script.questions.push(question.to_string());
        script.answers.pop_front().ok_or_else(|| {
            ApplicationError::PromptFailed {
                reason: format!("no scripted answer for '{question}'"),
            }
            .into()
        })
    }

    fn notify(&self, notice: Notice) {
        if let Ok(mut script) = self.script.lock() {
            script.notices.push(notice);
        }
    }
}
