//! User interaction boundary.
//!
//! Handlers talk to a [`Prompter`] so the menu loop can be driven by a
//! real terminal or by a scripted answer queue in tests.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::Result;

/// Source of user answers.
pub trait Prompter {
    /// Offer `items` and return the chosen index, or `None` if the user
    /// backed out.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Prompt` if the terminal cannot be driven.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>>;

    /// Read a line of free text.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Prompt` if the terminal cannot be driven.
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Read a numeric amount.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Prompt` if the terminal cannot be driven, or
    /// `AppError::InvalidInput` if the answer is not a number.
    fn input_amount(&mut self, prompt: &str) -> Result<f64>;
}

/// [`Prompter`] backed by the controlling terminal.
///
/// The calls block the current thread; the menu loop never has anything
/// else in flight while waiting for an answer.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Create a prompter using the colorful theme.
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
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?;
        Ok(answer)
    }

    fn input_amount(&mut self, prompt: &str) -> Result<f64> {
        let amount: f64 = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|value: &f64| -> std::result::Result<(), &str> {
                if value.is_finite() && *value >= 0.0 {
                    Ok(())
                } else {
                    Err("enter a non-negative amount")
                }
            })
            .interact_text()?;
        Ok(amount)
    }
}
