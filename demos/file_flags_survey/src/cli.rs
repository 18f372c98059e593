//! Command-line surface of the demo.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};
use confill::FlagSet;

/// Flags accepted by the demo.
///
/// `--year` is never read directly; it reaches the configuration through the
/// flag stage because its id matches the `Year` field.
#[derive(Debug, Clone, Parser)]
#[command(name = "file-flags-survey", version, about = "Layer a file, flags, and prompts")]
pub struct DemoCli {
    /// Configuration file, relative to the working directory.
    #[arg(long, default_value = "config_example.yml")]
    pub config: PathBuf,
    /// Print each prompt's help line before asking.
    #[arg(long)]
    pub explain: bool,
    /// Sets the `Year` field.
    #[arg(long)]
    pub year: Option<i64>,
}

/// Parses `args` (program name first) into the typed CLI and a flag set
/// sharing the same matches.
///
/// # Errors
///
/// Returns the `clap` error for invalid arguments or help/version requests.
pub fn parse<I, T>(args: I) -> Result<(DemoCli, FlagSet), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let command = DemoCli::command();
    let matches = command.clone().try_get_matches_from(args)?;
    let cli = DemoCli::from_arg_matches(&matches)?;
    Ok((cli, FlagSet::from_matches(command, matches)))
}

/// Whether `err` is a help or version request rather than a failure.
#[must_use]
pub fn is_display_request(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}
