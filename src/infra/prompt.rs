//! Terminal prompter
//!
//! The one production [`Prompter`] implementation, backed by dialoguer.

use dialoguer::{Confirm, Input, Password, Select};

use crate::core::prompter::Prompter;
use crate::error::PromptError;

/// Dialoguer-backed prompter for interactive terminals
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn interaction_error(label: &str, err: &dialoguer::Error) -> PromptError {
    PromptError::Interaction {
        label: label.to_string(),
        error: err.to_string(),
    }
}

impl Prompter for TerminalPrompter {
    fn select_one(&mut self, label: &str, items: &[String]) -> Result<usize, PromptError> {
        Select::new()
            .with_prompt(label)
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| interaction_error(label, &e))
    }

    fn text_input(&mut self, label: &str) -> Result<String, PromptError> {
        Input::new()
            .with_prompt(label)
            .interact_text()
            .map_err(|e| interaction_error(label, &e))
    }

    fn secret_input(&mut self, label: &str) -> Result<String, PromptError> {
        Password::new()
            .with_prompt(label)
            .interact()
            .map_err(|e| interaction_error(label, &e))
    }

    fn confirm(&mut self, label: &str) -> Result<bool, PromptError> {
        Confirm::new()
            .with_prompt(label)
            .default(false)
            .interact()
            .map_err(|e| interaction_error(label, &e))
    }
}
