//! Field schema derived from a destination type's declarations.
//!
//! `#[derive(Configurable)]` emits one [`FieldDecl`] per declared field. The
//! runtime turns those into [`FieldDescriptor`]s for a given tag namespace;
//! the descriptors drive every source stage.

mod describe;

pub use describe::{FieldDescriptor, derive_fields, describe, missing_fields};
pub(crate) use describe::visit_missing;

use crate::FieldValue;

/// Tag value that removes a field (and its subtree) from the schema.
pub const IGNORE_MARKER: &str = "-";

/// Tag values that mark a field as secret.
pub const SECRET_MARKERS: [&str; 2] = ["password", "secret"];

/// How the engine treats a declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// A value the engine reads and assigns through [`FieldValue`].
    Leaf,
    /// A field behind `Option`, `Box`, a smart pointer, or a reference.
    Indirect,
    /// A field marked `#[confill(skip)]`.
    Opaque,
    /// A nested record whose fields are described in place.
    Record(Vec<FieldDecl>),
}

/// Compile-time declaration of one struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    name: &'static str,
    tags: &'static [(&'static str, &'static str)],
    visible: bool,
    shape: FieldShape,
}

impl FieldDecl {
    /// Creates a declaration. Called by generated code.
    #[must_use]
    pub const fn new(
        name: &'static str,
        tags: &'static [(&'static str, &'static str)],
        visible: bool,
        shape: FieldShape,
    ) -> Self {
        Self {
            name,
            tags,
            visible,
            shape,
        }
    }

    /// Display name used for file keys, flags, and prompts.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Raw `(namespace, value)` tag pairs in declaration order.
    #[must_use]
    pub const fn tags(&self) -> &'static [(&'static str, &'static str)] {
        self.tags
    }

    /// Whether the field is `pub` (or otherwise has explicit visibility).
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// How the engine treats this field.
    #[must_use]
    pub const fn shape(&self) -> &FieldShape {
        &self.shape
    }

    /// Iterates the comma-separated tag values recorded under `namespace`.
    ///
    /// Repeated namespaces contribute their values in declaration order.
    pub fn tag_values<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.tags
            .iter()
            .filter(move |(ns, _)| *ns == namespace)
            .flat_map(|(_, value)| value.split(','))
            .map(str::trim)
    }

    /// Returns `true` when `namespace` carries `value` for this field.
    #[must_use]
    pub fn has_tag_value(&self, namespace: &str, value: &str) -> bool {
        self.tag_values(namespace).any(|v| v == value)
    }
}

/// A record type the engine can populate.
///
/// Implement this with `#[derive(Configurable)]`; hand-written impls must keep
/// [`Configurable::field`] and [`Configurable::field_mut`] consistent with the
/// index paths implied by [`Configurable::declarations`].
pub trait Configurable {
    /// Declarations for every named field, in declaration order.
    fn declarations() -> Vec<FieldDecl>
    where
        Self: Sized;

    /// Resolves a path of field indices to a leaf value.
    fn field(&self, path: &[usize]) -> Option<&dyn FieldValue>;

    /// Resolves a path of field indices to a mutable leaf value.
    fn field_mut(&mut self, path: &[usize]) -> Option<&mut dyn FieldValue>;
}
