//! Interactive adapter used by the solar fallback chain

use dialoguer::{Input, theme::ColorfulTheme};
use std::collections::VecDeque;
use std::sync::Mutex;
use tracing::debug;

/// Asks the user a single question
pub trait Prompter {
    /// Returns the raw answer, or `None` on end of input or interruption
    fn ask(&self, question: &str) -> Option<String>;
}

/// Prompts on the controlling terminal
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&self, question: &str) -> Option<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| debug!("Prompt aborted: {}", e))
            .ok()
    }
}

/// Replays canned answers in order, then behaves like end of input
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Questions asked so far
    #[must_use]
    pub fn questions(&self) -> Vec<String> {
        self.asked.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, question: &str) -> Option<String> {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(question.to_string());
        }
        self.answers.lock().ok()?.pop_front()
    }
}

/// Ask for a non-negative whole number. Blank, invalid or missing input
/// yields `None` so the caller can apply its default.
pub fn ask_number(prompter: &dyn Prompter, question: &str) -> Option<u32> {
    let answer = prompter.ask(question)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return None;
    }

    match answer.parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!("Ignoring non-numeric answer '{}'", answer);
            None
        }
    }
}
