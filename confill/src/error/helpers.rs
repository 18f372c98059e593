//! Helpers for classifying errors at application entry points.

use clap::error::ErrorKind;

use super::ConfillError;

/// Returns `true` when the flag stage failed because `--help` or `--version`
/// was requested.
///
/// Clap reports these as errors; callers usually want to print the rendered
/// output and exit successfully instead of treating configuration as broken.
#[must_use]
pub fn is_display_request(err: &ConfillError) -> bool {
    match err {
        ConfillError::FlagParsing(clap_err) => matches!(
            clap_err.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
        ),
        _ => false,
    }
}
