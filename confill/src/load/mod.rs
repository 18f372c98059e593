//! Resolution orchestrator.
//!
//! [`load`] runs the file, flag, and interactive sources in that order against
//! one destination. A file failure is kept aside and only reported if
//! required fields are still missing once every stage has run; flag parse
//! failures end the resolution immediately.

mod options;

pub use options::{DEFAULT_TAG_KEY, LoadOptions, Tunables};

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::file::decode_file;
use crate::flags::try_load_flags;
use crate::schema::missing_fields;
use crate::survey::try_ask;
use crate::{Configurable, ConfillResult};

/// Populates `dest` from `path`, flags, and prompts according to `options`.
///
/// `dest` may hold values already; only fields that are still zero are
/// filled by flags and prompts. The file stage overlays every key it
/// contains.
///
/// # Errors
///
/// Returns [`crate::ConfillError::FlagParsing`] if the flag set fails to
/// parse. Returns the file stage's [`crate::ConfillError::File`] or
/// [`crate::ConfillError::Decode`] only when some required field is still
/// missing at the end. A missing required field on its own is not an error;
/// use [`missing_fields`] to check for it.
///
/// # Examples
///
/// ```rust,no_run
/// use confill::{Configurable, LoadOptions, load};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, Serialize, Deserialize, Configurable)]
/// struct Settings {
///     pub name: String,
///     pub port: u16,
/// }
///
/// # fn main() -> confill::ConfillResult<()> {
/// let mut settings = Settings::default();
/// load("settings.yml", &mut settings, LoadOptions::default())?;
/// # Ok(())
/// # }
/// ```
pub fn load<T>(path: impl AsRef<Path>, dest: &mut T, options: LoadOptions<'_>) -> ConfillResult<()>
where
    T: Configurable + Serialize + DeserializeOwned,
{
    let file = path.as_ref();
    let LoadOptions {
        survey,
        decoder,
        flags,
        mut prompter,
        tunables,
    } = options;

    let prior = match decoder {
        Some(decoder) => match decode_file(file, dest, &*decoder) {
            Ok(()) => {
                debug!(path = %file.display(), "file stage complete");
                None
            }
            Err(err) => {
                debug!(path = %file.display(), error = %err, "file stage failed; continuing");
                Some(err)
            }
        },
        None => {
            debug!("file stage disabled");
            None
        }
    };

    if let Some(set) = flags {
        try_load_flags(set, dest, &tunables)?;
        debug!("flag stage complete");
    }

    if survey {
        let asked = try_ask(dest, &mut *prompter, &tunables);
        debug!(asked, "interactive stage complete");
    }

    match prior {
        Some(err) if missing_fields(dest, &tunables.tag_key).is_empty() => {
            debug!(error = %err, "later stages filled every required field; dropping file error");
            Ok(())
        }
        Some(err) => Err(err),
        None => Ok(()),
    }
}
