//! Procedural macros for `confill`.
//!
//! `#[derive(Configurable)]` walks a struct's named fields at compile time and
//! emits two things for the runtime crate: the ordered field declarations the
//! schema deriver consumes, and an accessor that resolves a field path to the
//! leaf value it names. Everything that depends on runtime options (the tag
//! namespace, which fields are still missing) is decided by `confill` itself.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `confill::Configurable`.
///
/// Field attributes:
///
/// - `#[confill(nested)]` expands a record-typed field into its own fields.
/// - `#[confill(skip)]` hides a field from the engine entirely; use it for
///   types that do not implement `confill::FieldValue`.
/// - `#[confill(tag(config = "password"))]` attaches a directive tag in the
///   named namespace. The runtime reads the namespace selected by
///   `LoadOptions::tag_key`.
///
/// Struct attribute `#[confill(crate = "alias")]` changes the path generated
/// code uses to reach the runtime crate.
#[proc_macro_derive(Configurable, attributes(confill))]
pub fn derive_configurable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
