//! Turns declarations into descriptors and finds fields still unset.

use tracing::debug;

use super::{Configurable, FieldDecl, FieldShape, IGNORE_MARKER, SECRET_MARKERS};
use crate::FieldValue;

/// A leaf field as seen by the source stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field indices from the destination root to the leaf.
    pub path: Vec<usize>,
    /// Display name of the leaf.
    pub name: String,
    /// Whether a zero value counts as missing.
    pub required: bool,
    /// Whether the value must be masked when prompted.
    pub secret: bool,
}

/// Builds descriptors for `decls`, reading directives from `tag_key`.
///
/// Indirect and opaque fields are skipped. Ignored fields vanish together with
/// any nested fields they hold. Records are flattened: each child path is
/// prefixed with the record's index and the record itself never appears.
#[must_use]
pub fn describe(decls: &[FieldDecl], tag_key: &str) -> Vec<FieldDescriptor> {
    let mut out = Vec::new();
    walk(decls, &[], tag_key, &mut out);
    out
}

fn walk(decls: &[FieldDecl], prefix: &[usize], tag_key: &str, out: &mut Vec<FieldDescriptor>) {
    for (index, decl) in decls.iter().enumerate() {
        if decl.has_tag_value(tag_key, IGNORE_MARKER) {
            continue;
        }
        let mut path = prefix.to_vec();
        path.push(index);
        match decl.shape() {
            FieldShape::Indirect | FieldShape::Opaque => {}
            FieldShape::Record(children) => walk(children, &path, tag_key, out),
            FieldShape::Leaf => out.push(FieldDescriptor {
                path,
                name: decl.name().to_owned(),
                required: decl.is_visible(),
                secret: SECRET_MARKERS
                    .iter()
                    .any(|marker| decl.has_tag_value(tag_key, marker)),
            }),
        }
    }
}

/// Derives the descriptors of `T` for the `tag_key` namespace.
#[must_use]
pub fn derive_fields<T: Configurable>(tag_key: &str) -> Vec<FieldDescriptor> {
    describe(&T::declarations(), tag_key)
}

/// Lists the required fields of `dest` that still hold their zero value.
///
/// Useful after a load with the interactive stage disabled.
#[must_use]
pub fn missing_fields<T: Configurable>(dest: &T, tag_key: &str) -> Vec<FieldDescriptor> {
    derive_fields::<T>(tag_key)
        .into_iter()
        .filter(|descriptor| descriptor.required)
        .filter(|descriptor| dest.field(&descriptor.path).is_some_and(|value| value.is_zero()))
        .collect()
}

/// Calls `visit` for each required field of `dest` that is zero right now.
///
/// The zero check happens just before each visit, so a visitor that fills one
/// field never causes a later field to be skipped or revisited.
pub(crate) fn visit_missing<T, F>(dest: &mut T, tag_key: &str, mut visit: F)
where
    T: Configurable,
    F: FnMut(&FieldDescriptor, &mut dyn FieldValue),
{
    for descriptor in derive_fields::<T>(tag_key) {
        if !descriptor.required {
            continue;
        }
        let Some(value) = dest.field_mut(&descriptor.path) else {
            debug!(field = %descriptor.name, "no accessor for declared field");
            continue;
        };
        if value.is_zero() {
            visit(&descriptor, value);
        }
    }
}
