//! Options accepted by [`crate::load`].

use std::fmt;

use crate::coerce::DEFAULT_TIME_LAYOUT;
use crate::file::FileDecoder;
use crate::flags::FlagSet;
use crate::survey::{Prompter, TerminalPrompter};

/// Tag namespace read when no other is configured.
pub const DEFAULT_TAG_KEY: &str = "config";

/// Settings shared by every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tunables {
    /// Namespace of `#[confill(tag(...))]` entries holding directives.
    pub tag_key: String,
    /// `chrono` format used to parse and render timestamps.
    pub time_layout: String,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            tag_key: DEFAULT_TAG_KEY.to_owned(),
            time_layout: DEFAULT_TIME_LAYOUT.to_owned(),
        }
    }
}

/// Configuration for one [`crate::load`] call.
///
/// Defaults: YAML decoding (when the `yaml` feature is on), no flags,
/// terminal prompts, tag key `config`, and the RFC 1123 timestamp layout.
///
/// ```rust
/// use confill::{FlagSet, LoadOptions, ScriptedPrompter};
///
/// let mut flags = FlagSet::new(clap::Command::new("app"));
/// let options = LoadOptions::default()
///     .with_flags(&mut flags)
///     .with_prompter(ScriptedPrompter::default())
///     .with_tag_key("settings");
/// assert_eq!(options.tunables().tag_key, "settings");
/// ```
pub struct LoadOptions<'a> {
    pub(super) survey: bool,
    pub(super) decoder: Option<Box<dyn FileDecoder + 'a>>,
    pub(super) flags: Option<&'a mut FlagSet>,
    pub(super) prompter: Box<dyn Prompter + 'a>,
    pub(super) tunables: Tunables,
}

impl Default for LoadOptions<'_> {
    fn default() -> Self {
        Self {
            survey: true,
            decoder: default_decoder(),
            flags: None,
            prompter: Box::new(TerminalPrompter::new()),
            tunables: Tunables::default(),
        }
    }
}

#[cfg(feature = "yaml")]
fn default_decoder<'a>() -> Option<Box<dyn FileDecoder + 'a>> {
    Some(Box::new(crate::file::Yaml))
}

#[cfg(not(feature = "yaml"))]
fn default_decoder<'a>() -> Option<Box<dyn FileDecoder + 'a>> {
    None
}

impl fmt::Debug for LoadOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("survey", &self.survey)
            .field("decoder", &self.decoder.is_some())
            .field("flags", &self.flags)
            .field("tunables", &self.tunables)
            .finish_non_exhaustive()
    }
}

impl<'a> LoadOptions<'a> {
    /// Equivalent to [`LoadOptions::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables the interactive stage.
    #[must_use]
    pub const fn without_survey(mut self) -> Self {
        self.survey = false;
        self
    }

    /// Enables or disables the interactive stage.
    #[must_use]
    pub const fn with_survey(mut self, enabled: bool) -> Self {
        self.survey = enabled;
        self
    }

    /// Overlays `flags` after the file stage.
    #[must_use]
    pub fn with_flags(mut self, flags: &'a mut FlagSet) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Replaces the file decoder.
    #[must_use]
    pub fn with_file_decoder(mut self, decoder: impl FileDecoder + 'a) -> Self {
        self.decoder = Some(Box::new(decoder));
        self
    }

    /// Skips the file stage entirely.
    #[must_use]
    pub fn without_file_decoder(mut self) -> Self {
        self.decoder = None;
        self
    }

    /// Replaces the terminal prompter.
    #[must_use]
    pub fn with_prompter(mut self, prompter: impl Prompter + 'a) -> Self {
        self.prompter = Box::new(prompter);
        self
    }

    /// Reads directives from the `key` tag namespace.
    #[must_use]
    pub fn with_tag_key(mut self, key: impl Into<String>) -> Self {
        self.tunables.tag_key = key.into();
        self
    }

    /// Parses and renders timestamps with `layout`.
    #[must_use]
    pub fn with_time_layout(mut self, layout: impl Into<String>) -> Self {
        self.tunables.time_layout = layout.into();
        self
    }

    /// Whether the interactive stage will run.
    #[must_use]
    pub const fn survey_enabled(&self) -> bool {
        self.survey
    }

    /// Settings shared by every stage.
    #[must_use]
    pub const fn tunables(&self) -> &Tunables {
        &self.tunables
    }
}
