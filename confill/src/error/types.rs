//! Error enums for configuration resolution and operator prompts.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can end a resolution.
///
/// [`Self::File`] and [`Self::Decode`] are soft: they come from the file stage
/// and are discarded when later stages leave no required field missing.
/// [`Self::FlagParsing`] is fatal and aborts the remaining stages.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfillError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file '{path}': {source}")]
    File {
        /// Absolute path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its contents could not be mapped onto the
    /// destination.
    #[error("failed to decode configuration file '{path}': {source}")]
    Decode {
        /// Absolute path whose contents failed to decode.
        path: PathBuf,
        /// Decoder or extraction failure.
        #[source]
        source: Box<figment::Error>,
    },

    /// The flag set could not be parsed.
    #[error("failed to parse command-line flags: {0}")]
    FlagParsing(#[from] Box<clap::Error>),
}

impl ConfillError {
    /// Returns `true` for errors a later stage may make irrelevant.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        matches!(self, Self::File { .. } | Self::Decode { .. })
    }

    /// Construct a decode error for `path`.
    pub(crate) fn decode(path: impl Into<PathBuf>, source: figment::Error) -> Self {
        Self::Decode {
            path: path.into(),
            source: Box::new(source),
        }
    }
}

impl From<clap::Error> for ConfillError {
    fn from(e: clap::Error) -> Self {
        Self::FlagParsing(Box::new(e))
    }
}

/// Convenience alias for results produced by this crate.
pub type ConfillResult<T> = Result<T, ConfillError>;

/// Failures raised while asking the operator for a value.
///
/// These never end a resolution; the field is left untouched instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PromptError {
    /// The terminal prompt could not be shown or read.
    #[error("terminal prompt failed: {0}")]
    Terminal(#[from] dialoguer::Error),

    /// A scripted prompter ran out of answers.
    #[error("no scripted answer left for '{0}'")]
    Exhausted(String),

    /// A scripted answer did not match the prompt style.
    #[error("scripted answer for '{name}' does not fit a {style} prompt")]
    Mismatch {
        /// Field display name.
        name: String,
        /// Prompt style that was requested.
        style: &'static str,
    },
}
