//! Test utilities
//!
//! Scripted prompter double and proptest generators shared by unit tests.

use crate::core::prompter::Prompter;
use crate::error::PromptError;

/// A pre-recorded prompt answer
#[derive(Debug, Clone)]
pub enum Answer {
    Select(usize),
    Text(String),
    Secret(String),
    Confirm(bool),
}

/// Scripted [`Prompter`] that replays recorded answers in order and counts
/// interactions, so tests can assert which prompts ran (or that none did)
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<Answer>,
    calls: usize,
    secret_calls: usize,
    last_items: Option<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            ..Self::default()
        }
    }

    /// A prompter that fails on any interaction
    pub fn empty() -> Self {
        Self::default()
    }

    /// Total number of prompts that ran
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Number of masked-input prompts that ran
    pub fn secret_calls(&self) -> usize {
        self.secret_calls
    }

    /// Items offered by the most recent selection prompt
    pub fn last_items(&self) -> Option<&[String]> {
        self.last_items.as_deref()
    }

    fn next(&mut self, label: &str) -> Result<Answer, PromptError> {
        self.calls += 1;
        self.answers.pop_front().ok_or_else(|| PromptError::Exhausted {
            label: label.to_string(),
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn select_one(&mut self, label: &str, items: &[String]) -> Result<usize, PromptError> {
        self.last_items = Some(items.to_vec());
        match self.next(label)? {
            Answer::Select(index) => Ok(index),
            other => panic!("expected Select answer for '{label}', got {other:?}"),
        }
    }

    fn text_input(&mut self, label: &str) -> Result<String, PromptError> {
        match self.next(label)? {
            Answer::Text(value) => Ok(value),
            other => panic!("expected Text answer for '{label}', got {other:?}"),
        }
    }

    fn secret_input(&mut self, label: &str) -> Result<String, PromptError> {
        self.secret_calls += 1;
        match self.next(label)? {
            Answer::Secret(value) => Ok(value),
            other => panic!("expected Secret answer for '{label}', got {other:?}"),
        }
    }

    fn confirm(&mut self, label: &str) -> Result<bool, PromptError> {
        match self.next(label)? {
            Answer::Confirm(value) => Ok(value),
            other => panic!("expected Confirm answer for '{label}', got {other:?}"),
        }
    }
}

/// Generators and helpers for proptest
pub mod generators {
    use proptest::prelude::*;

    /// Generate a valid project name (lowercase, digits, underscores)
    pub fn project_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_]{0,30}"
    }

    /// Generate an SSID that may contain quotes and backslashes
    pub fn ssid() -> impl Strategy<Value = String> {
        r#"[a-zA-Z0-9 "\\_-]{1,32}"#
    }

    /// Generate a WPA passphrase that may contain quotes and backslashes
    pub fn psk() -> impl Strategy<Value = String> {
        r#"[a-zA-Z0-9"\\!@#$%_-]{8,63}"#
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_project_name_generator(name in project_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().next().unwrap().is_ascii_lowercase());
            prop_assert!(name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        }

        #[test]
        fn test_psk_generator_length(value in psk()) {
            prop_assert!((8..=63).contains(&value.len()));
        }
    }
}
