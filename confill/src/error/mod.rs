//! Error types produced by the resolution engine.

mod helpers;
mod types;

pub use helpers::is_display_request;
pub use types::{ConfillError, ConfillResult, PromptError};

#[cfg(test)]
mod tests;
