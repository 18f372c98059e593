//! Multi-source configuration resolution.
//!
//! `confill` fills a configuration record from three sources in strict order:
//! a configuration file, declared command-line flags, and, for anything still
//! missing, interactive prompts. The record's shape comes from
//! `#[derive(Configurable)]`; no external schema is needed.
//!
//! ```rust,no_run
//! use confill::{Configurable, FlagSet, LoadOptions, load};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize, Configurable)]
//! struct Database {
//!     pub host: String,
//!     #[confill(tag(config = "password"))]
//!     pub password: String,
//! }
//!
//! #[derive(Debug, Default, Serialize, Deserialize, Configurable)]
//! struct Settings {
//!     pub name: String,
//!     pub port: u16,
//!     #[confill(nested)]
//!     pub database: Database,
//!     #[confill(tag(config = "-"))]
//!     pub scratch: String,
//! }
//!
//! # fn main() -> confill::ConfillResult<()> {
//! let command = clap::Command::new("app").arg(clap::Arg::new("port").long("port"));
//! let mut flags = FlagSet::new(command);
//! let mut settings = Settings::default();
//! load(
//!     "settings.yml",
//!     &mut settings,
//!     LoadOptions::default().with_flags(&mut flags),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! A field counts as missing while it holds its zero value, as reported by
//! [`FieldValue::is_zero`]. Only visible (`pub`) leaves can be missing.

extern crate self as confill;

pub use confill_macros::Configurable;

pub mod coerce;
mod error;
pub mod field;
pub mod file;
pub mod flags;
mod load;
pub mod schema;
pub mod survey;

pub use coerce::{Coerced, DEFAULT_TIME_LAYOUT, Kind, Raw, Value, coerce};
pub use error::{ConfillError, ConfillResult, PromptError, is_display_request};
pub use field::FieldValue;
pub use file::{FileDecoder, decode_file};
pub use flags::{FlagSet, try_load_flags};
pub use load::{DEFAULT_TAG_KEY, LoadOptions, Tunables, load};
pub use schema::{
    Configurable, FieldDecl, FieldDescriptor, FieldShape, derive_fields, describe, missing_fields,
};
pub use survey::{
    Answer, PromptKind, PromptSpec, Prompter, ScriptedPrompter, TerminalPrompter, try_ask,
};
