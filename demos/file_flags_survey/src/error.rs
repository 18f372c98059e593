//! Error type for the demo.

use thiserror::Error;

/// Errors raised by the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Configuration could not be resolved.
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] confill::ConfillError),
    /// The report could not be written.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for the demo.
pub type Result<T, E = DemoError> = std::result::Result<T, E>;
