//! The prompting seam and its terminal implementation.

use dialoguer::{Confirm, Input, Password, console::Term};

use super::PromptSpec;
use crate::PromptError;

/// Asks an operator for values.
pub trait Prompter {
    /// Asks a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns a [`PromptError`] if no answer could be obtained.
    fn confirm(&mut self, spec: &PromptSpec) -> Result<bool, PromptError>;

    /// Reads text without echoing it.
    ///
    /// # Errors
    ///
    /// Returns a [`PromptError`] if no answer could be obtained.
    fn password(&mut self, spec: &PromptSpec) -> Result<String, PromptError>;

    /// Reads free text.
    ///
    /// # Errors
    ///
    /// Returns a [`PromptError`] if no answer could be obtained.
    fn input(&mut self, spec: &PromptSpec) -> Result<String, PromptError>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn confirm(&mut self, spec: &PromptSpec) -> Result<bool, PromptError> {
        (**self).confirm(spec)
    }

    fn password(&mut self, spec: &PromptSpec) -> Result<String, PromptError> {
        (**self).password(spec)
    }

    fn input(&mut self, spec: &PromptSpec) -> Result<String, PromptError> {
        (**self).input(spec)
    }
}

/// Prompts on the controlling terminal via `dialoguer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter {
    show_help: bool,
}

impl TerminalPrompter {
    /// Creates a prompter that shows only the question.
    #[must_use]
    pub const fn new() -> Self {
        Self { show_help: false }
    }

    /// Also prints each prompt's help line before asking.
    #[must_use]
    pub const fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    fn help(self, spec: &PromptSpec) -> Result<(), PromptError> {
        if self.show_help {
            Term::stderr()
                .write_line(&spec.help)
                .map_err(dialoguer::Error::from)?;
        }
        Ok(())
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, spec: &PromptSpec) -> Result<bool, PromptError> {
        self.help(spec)?;
        Ok(Confirm::new()
            .with_prompt(&spec.message)
            .default(false)
            .interact()?)
    }

    fn password(&mut self, spec: &PromptSpec) -> Result<String, PromptError> {
        self.help(spec)?;
        Ok(Password::new()
            .with_prompt(&spec.message)
            .allow_empty_password(true)
            .interact()?)
    }

    fn input(&mut self, spec: &PromptSpec) -> Result<String, PromptError> {
        self.help(spec)?;
        let mut input = Input::<String>::new()
            .with_prompt(&spec.message)
            .allow_empty(true);
        if let Some(default) = spec.default.as_ref().filter(|d| !d.is_empty()) {
            input = input.default(default.clone());
        }
        Ok(input.interact_text()?)
    }
}
