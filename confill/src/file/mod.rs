//! File source: reads a configuration file and layers it over a destination.

mod decoders;

use std::path::Path;

use figment::{
    Figment,
    providers::Serialized,
    value::{Dict, Value as FigmentValue},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::schema::{Configurable, FieldDecl, FieldShape};
use crate::{ConfillError, ConfillResult};

#[cfg(feature = "serde_json")]
pub use decoders::Json;
#[cfg(feature = "toml")]
pub use decoders::Toml;
#[cfg(feature = "yaml")]
pub use decoders::Yaml;

/// Turns raw file bytes into a tree of values.
///
/// The tree is merged over the destination's current state, so keys the file
/// does not mention keep their values. Any closure with a matching signature
/// is a decoder.
pub trait FileDecoder {
    /// Decodes `contents` into a value tree.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if `contents` are malformed.
    fn decode(&self, contents: &[u8]) -> Result<FigmentValue, figment::Error>;
}

impl<F> FileDecoder for F
where
    F: Fn(&[u8]) -> Result<FigmentValue, figment::Error>,
{
    fn decode(&self, contents: &[u8]) -> Result<FigmentValue, figment::Error> {
        self(contents)
    }
}

/// Reads `path` and decodes it into `dest`.
///
/// Relative paths are resolved against the current working directory.
/// Leaves that `serde` does not serialize, such as `#[serde(skip)]` fields,
/// keep their value unless the file names them. This works through
/// [`crate::FieldValue::to_value`]; skipped `Option` fields, `#[confill(skip)]`
/// fields, and user leaves that report no value are reset to `Default`.
///
/// # Errors
///
/// Returns [`ConfillError::File`] if the file cannot be read and
/// [`ConfillError::Decode`] if the decoder fails or the merged tree does not
/// fit `T`. On error `dest` is left unchanged.
pub fn decode_file<T>(path: &Path, dest: &mut T, decoder: &dyn FileDecoder) -> ConfillResult<()>
where
    T: Configurable + Serialize + DeserializeOwned,
{
    let absolute = std::path::absolute(path).map_err(|source| ConfillError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let contents = std::fs::read(&absolute).map_err(|source| ConfillError::File {
        path: absolute.clone(),
        source,
    })?;
    debug!(path = %absolute.display(), bytes = contents.len(), "read configuration file");
    let tree = decoder
        .decode(&contents)
        .map_err(|e| ConfillError::decode(&absolute, e))?;
    let current =
        FigmentValue::serialize(&*dest).map_err(|e| ConfillError::decode(&absolute, e))?;
    let mut unseen = Vec::new();
    unserialized_leaves(
        &T::declarations(),
        current.as_dict(),
        tree.as_dict(),
        &[],
        &mut unseen,
    );
    let mut merged = Figment::from(Serialized::defaults(current))
        .merge(Serialized::defaults(tree))
        .extract::<T>()
        .map_err(|e| ConfillError::decode(&absolute, e))?;
    for (path, named_by_file) in &unseen {
        let decoded = merged.field(path).is_some_and(|field| !field.is_zero());
        if !(*named_by_file && decoded) {
            carry_over(dest, &mut merged, path);
        }
    }
    *dest = merged;
    Ok(())
}

/// Collects the leaves missing from the serialized destination, each with
/// whether the file tree names it. A record missing from `current` is looked
/// up in place, which covers `#[serde(flatten)]`.
fn unserialized_leaves(
    decls: &[FieldDecl],
    current: Option<&Dict>,
    file: Option<&Dict>,
    prefix: &[usize],
    out: &mut Vec<(Vec<usize>, bool)>,
) {
    for (index, decl) in decls.iter().enumerate() {
        let mut path = prefix.to_vec();
        path.push(index);
        let in_current = current.and_then(|dict| dict.get(decl.name()));
        let in_file = file.and_then(|dict| dict.get(decl.name()));
        match decl.shape() {
            FieldShape::Leaf if in_current.is_none() => out.push((path, in_file.is_some())),
            FieldShape::Record(children) => {
                let (nested_current, nested_file) = in_current.map_or((current, file), |value| {
                    (value.as_dict(), in_file.and_then(FigmentValue::as_dict))
                });
                unserialized_leaves(children, nested_current, nested_file, &path, out);
            }
            FieldShape::Leaf | FieldShape::Indirect | FieldShape::Opaque => {}
        }
    }
}

fn carry_over<T: Configurable>(from: &T, to: &mut T, path: &[usize]) {
    let Some(value) = from.field(path).and_then(|field| field.to_value()) else {
        return;
    };
    if let Some(field) = to.field_mut(path) {
        field.assign(value);
    }
}
