//! Flag source: overlays declared command-line arguments onto missing fields.
//!
//! The engine never declares arguments. Callers build a [`clap::Command`]
//! with one arg per field they want exposed, named after the field's display
//! name in lowercase (`log_level` may also be spelled `--log-level`).

use std::ffi::OsString;

use clap::{ArgMatches, Command};
use tracing::debug;

use crate::coerce::{Raw, coerce};
use crate::field::store;
use crate::load::Tunables;
use crate::schema::visit_missing;
use crate::{Configurable, ConfillResult};

/// A caller-declared command and, once parsed, its matches.
#[derive(Debug, Clone)]
pub struct FlagSet {
    command: Command,
    matches: Option<ArgMatches>,
}

impl FlagSet {
    /// Wraps an unparsed command.
    #[must_use]
    pub const fn new(command: Command) -> Self {
        Self {
            command,
            matches: None,
        }
    }

    /// Wraps a command whose matches were already obtained by the caller.
    #[must_use]
    pub const fn from_matches(command: Command, matches: ArgMatches) -> Self {
        Self {
            command,
            matches: Some(matches),
        }
    }

    /// Whether arguments have been parsed.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        self.matches.is_some()
    }

    /// The declared command.
    #[must_use]
    pub const fn command(&self) -> &Command {
        &self.command
    }

    /// Parsed matches, if any.
    #[must_use]
    pub const fn matches(&self) -> Option<&ArgMatches> {
        self.matches.as_ref()
    }

    /// Parses `args`, which must not include the program name.
    ///
    /// # Errors
    ///
    /// Returns the [`clap::Error`] produced for invalid arguments, including
    /// `--help` and `--version` display requests.
    pub fn parse<I, T>(&mut self, args: I) -> Result<(), clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let program = OsString::from(self.command.get_name());
        let argv = std::iter::once(program).chain(args.into_iter().map(Into::into));
        let matches = self.command.try_get_matches_from_mut(argv)?;
        self.matches = Some(matches);
        Ok(())
    }

    /// Parses the process arguments unless already parsed.
    ///
    /// # Errors
    ///
    /// Returns the [`clap::Error`] produced for invalid arguments.
    pub fn parse_env(&mut self) -> Result<(), clap::Error> {
        if self.is_parsed() {
            return Ok(());
        }
        self.parse(std::env::args_os().skip(1))
    }

    /// Returns the string form of the value supplied for `name`.
    ///
    /// `name` matches an arg id or long name, with underscores also tried as
    /// hyphens. Values from clap defaults count as supplied. Multiple values
    /// are joined with `,`. Returns `None` for undeclared or valueless args
    /// and before parsing.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<String> {
        let matches = self.matches.as_ref()?;
        let hyphenated = name.replace('_', "-");
        let arg = self.command.get_arguments().find(|arg| {
            [name, hyphenated.as_str()].iter().any(|candidate| {
                arg.get_id().as_str() == *candidate || arg.get_long() == Some(*candidate)
            })
        })?;
        let raw = matches.try_get_raw(arg.get_id().as_str()).ok()??;
        let parts: Vec<String> = raw
            .map(|value| value.to_string_lossy().into_owned())
            .collect();
        if parts.is_empty() {
            return None;
        }
        Some(parts.join(","))
    }
}

/// Fills missing required fields of `dest` from `set`.
///
/// Parses the process arguments first if `set` is unparsed. Fields without a
/// declared, valued arg stay missing.
///
/// # Errors
///
/// Returns [`crate::ConfillError::FlagParsing`] if the arguments fail to
/// parse.
pub fn try_load_flags<T: Configurable>(
    set: &mut FlagSet,
    dest: &mut T,
    tunables: &Tunables,
) -> ConfillResult<()> {
    set.parse_env()?;
    visit_missing(dest, &tunables.tag_key, |descriptor, value| {
        let flag = descriptor.name.to_lowercase();
        let Some(text) = set.lookup(&flag) else {
            return;
        };
        match coerce(Raw::Str(&text), value.kind(), &tunables.time_layout) {
            Some(coerced) => store(value, coerced, &descriptor.name, "flags"),
            None => debug!(field = %descriptor.name, flag, "flag value has no conversion"),
        }
    });
    Ok(())
}

#[cfg(test)]
mod tests;
