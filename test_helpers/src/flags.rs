//! Builders for `clap` commands used as flag sets in tests.

use clap::{Arg, ArgAction, Command};

/// Builds a command declaring `--<name>` for each entry of `names`.
///
/// Every option takes one value and may be repeated; repeated values are
/// collected in order.
#[must_use]
pub fn command_with_longs(bin: &'static str, names: &[&'static str]) -> Command {
    names.iter().fold(Command::new(bin), |command, name| {
        command.arg(Arg::new(*name).long(*name).action(ArgAction::Append))
    })
}
