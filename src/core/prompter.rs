//! Interactive prompt capability trait
//!
//! Core logic never talks to a terminal directly; it depends on this
//! capability set only. The production implementation lives in
//! [`crate::infra::prompt`]; tests use a scripted fake.

use crate::error::PromptError;

/// The prompt capabilities configuration resolution needs
pub trait Prompter {
    /// Present `items` in order and return the index of the chosen one
    fn select_one(&mut self, label: &str, items: &[String]) -> Result<usize, PromptError>;

    /// Read a line of plain text
    fn text_input(&mut self, label: &str) -> Result<String, PromptError>;

    /// Read a line with echo suppressed
    fn secret_input(&mut self, label: &str) -> Result<String, PromptError>;

    /// Ask a yes/no question
    fn confirm(&mut self, label: &str) -> Result<bool, PromptError>;
}
