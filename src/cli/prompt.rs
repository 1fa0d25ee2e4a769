//! Operator input boundary.
//!
//! The interactive loop talks to a [`Prompter`] rather than the terminal
//! directly, so the menu state machine can be driven by a scripted
//! implementation in tests.

use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::error::Result;

/// Single-choice and yes/no prompting.
pub trait Prompter {
    /// Present a single-choice list; returns the chosen index.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Ask a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
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
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}
