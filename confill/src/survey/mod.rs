//! Interactive source: asks an operator for fields that are still missing.
//!
//! Prompts go through the [`Prompter`] trait. [`TerminalPrompter`] drives a
//! real terminal; [`ScriptedPrompter`] replays canned answers.

mod prompter;
mod scripted;

pub use prompter::{Prompter, TerminalPrompter};
pub use scripted::{Answer, PromptKind, ScriptedPrompter};

use tracing::{debug, warn};

use crate::coerce::{Kind, Raw, coerce};
use crate::field::{FieldValue, store, zero_hint};
use crate::load::Tunables;
use crate::schema::{FieldDescriptor, visit_missing};
use crate::Configurable;

/// Everything a prompter needs to ask for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    /// Display name of the field.
    pub name: String,
    /// Question shown to the operator.
    pub message: String,
    /// Longer explanation of the expected value.
    pub help: String,
    /// Suggested answer for free-text prompts.
    pub default: Option<String>,
}

impl PromptSpec {
    fn for_field(descriptor: &FieldDescriptor, field: &dyn FieldValue, layout: &str) -> Self {
        let name = descriptor.name.clone();
        let ty = field.type_name();
        if field.kind() == Kind::Bool {
            return Self {
                message: format!("{name}?"),
                help: format!("The provided type of '{name}' should be {ty}."),
                default: None,
                name,
            };
        }
        let message = format!("Please type the value for the setting '{name}'");
        if descriptor.secret {
            return Self {
                message,
                help: format!("The provided type of '{name}' should be a secret of {ty}."),
                default: None,
                name,
            };
        }
        Self {
            message,
            help: format!("The provided type of '{name}' should be {ty}."),
            default: Some(zero_hint(field, layout)),
            name,
        }
    }
}

/// Prompts for each missing required field of `dest`, in schema order.
///
/// Booleans are confirmed, secrets read without echo, everything else read as
/// text with the zero value as default. Answers that fail to convert store the
/// zero value; failed prompts leave the field untouched. Fields of an
/// unsupported kind are skipped.
///
/// Returns whether any field was eligible for prompting.
pub fn try_ask<T: Configurable>(
    dest: &mut T,
    prompter: &mut dyn Prompter,
    tunables: &Tunables,
) -> bool {
    let layout = tunables.time_layout.as_str();
    let mut eligible = false;
    visit_missing(dest, &tunables.tag_key, |descriptor, field| {
        let kind = field.kind();
        if kind == Kind::Unsupported {
            debug!(field = %descriptor.name, "no prompt for unsupported field kind");
            return;
        }
        eligible = true;
        let spec = PromptSpec::for_field(descriptor, field, layout);
        let answer = if kind == Kind::Bool {
            prompter
                .confirm(&spec)
                .map(|yes| coerce(Raw::Bool(yes), kind, layout))
        } else if descriptor.secret {
            prompter
                .password(&spec)
                .map(|text| coerce(Raw::Str(&text), kind, layout))
        } else {
            prompter
                .input(&spec)
                .map(|text| coerce(Raw::Str(&text), kind, layout))
        };
        match answer {
            Ok(Some(coerced)) => store(field, coerced, &descriptor.name, "prompt"),
            Ok(None) => debug!(field = %descriptor.name, "answer has no conversion"),
            Err(err) => warn!(field = %descriptor.name, error = %err, "prompt failed; field left unset"),
        }
    });
    eligible
}
