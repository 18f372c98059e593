//! Configuration shape populated by the demo.

use confill::{Configurable, FlagSet, LoadOptions, Prompter, load};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Database access, all asked for unless the file provides them.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Configurable)]
#[serde(rename_all = "PascalCase")]
pub struct DatabaseCredentials {
    /// Login name.
    pub username: String,
    /// Read without echo.
    #[confill(tag(config = "password"))]
    pub password: String,
    /// Server host name.
    pub host: String,
    /// Database to open.
    #[serde(rename = "DBName")]
    pub db_name: String,
}

/// Top-level demo configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, Configurable)]
#[serde(rename_all = "PascalCase")]
pub struct Configuration {
    /// Listen address; required and not defaulted.
    pub addr: String,
    /// Defaulted in code before loading, so never asked for.
    pub server_name: String,
    /// Expected to come from the file.
    pub author: String,
    /// Asked as a yes/no question when unset.
    pub debug: bool,
    /// Also asked as a yes/no question.
    pub required: bool,
    /// Usually supplied with `--year`.
    pub year: i64,
    #[serde(skip)]
    unexported: String,
    /// Ignored by the file and by the engine.
    #[serde(skip)]
    #[confill(tag(config = "-"))]
    pub exported_ignored: String,
    /// Nested record; its fields are resolved individually.
    #[serde(rename = "DBCredentials")]
    #[confill(nested)]
    pub db_credentials: DatabaseCredentials,
}

impl Configuration {
    /// A configuration with the in-code defaults applied.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            server_name: String::from("confill demo"),
            ..Self::default()
        }
    }

    /// Private state that no source can touch.
    #[must_use]
    pub fn unexported(&self) -> &str {
        &self.unexported
    }
}

/// Resolves the demo configuration from `path`, `flags`, and `prompter`.
///
/// # Errors
///
/// Returns an error when the flags fail to parse or when the file fails and
/// required fields remain unset.
pub fn resolve(
    path: &std::path::Path,
    flags: &mut FlagSet,
    prompter: impl Prompter,
) -> Result<Configuration> {
    let mut config = Configuration::with_defaults();
    load(
        path,
        &mut config,
        LoadOptions::default()
            .with_flags(flags)
            .with_prompter(prompter),
    )?;
    Ok(config)
}
