//! A prompter that replays canned answers.

use std::collections::VecDeque;

use super::{PromptSpec, Prompter};
use crate::PromptError;

/// The style of prompt that was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Yes/no confirmation.
    Confirm,
    /// Masked text.
    Password,
    /// Free text.
    Input,
}

impl PromptKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::Password => "password",
            Self::Input => "input",
        }
    }
}

/// A canned answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Answers a confirmation.
    Confirm(bool),
    /// Answers a password or input prompt.
    Text(String),
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Self::Confirm(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Answers prompts from a queue and records what was asked.
///
/// ```
/// use confill::{Answer, ScriptedPrompter};
///
/// let prompter = ScriptedPrompter::new([Answer::from("svc"), Answer::from(true)]);
/// assert!(prompter.asked().is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<(PromptKind, PromptSpec)>,
}

impl ScriptedPrompter {
    /// Queues `answers` in the order they will be given.
    #[must_use]
    pub fn new<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = Answer>,
    {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    #[must_use]
    pub fn asked(&self) -> &[(PromptKind, PromptSpec)] {
        &self.asked
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, kind: PromptKind, spec: &PromptSpec) -> Result<Answer, PromptError> {
        self.asked.push((kind, spec.clone()));
        self.answers
            .pop_front()
            .ok_or_else(|| PromptError::Exhausted(spec.name.clone()))
    }

    fn text(&mut self, kind: PromptKind, spec: &PromptSpec) -> Result<String, PromptError> {
        match self.next(kind, spec)? {
            Answer::Text(text) => Ok(text),
            Answer::Confirm(_) => Err(PromptError::Mismatch {
                name: spec.name.clone(),
                style: kind.label(),
            }),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, spec: &PromptSpec) -> Result<bool, PromptError> {
        match self.next(PromptKind::Confirm, spec)? {
            Answer::Confirm(yes) => Ok(yes),
            Answer::Text(_) => Err(PromptError::Mismatch {
                name: spec.name.clone(),
                style: PromptKind::Confirm.label(),
            }),
        }
    }

    fn password(&mut self, spec: &PromptSpec) -> Result<String, PromptError> {
        self.text(PromptKind::Password, spec)
    }

    fn input(&mut self, spec: &PromptSpec) -> Result<String, PromptError> {
        self.text(PromptKind::Input, spec)
    }
}
