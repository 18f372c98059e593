//! Parsing utilities for the `Configurable` derive macro.
//!
//! Unknown keys inside `#[confill(...)]` are discarded. Malformed values of
//! recognised keys are reported as compile errors.

use syn::meta::ParseNestedMeta;
use syn::parenthesized;
use syn::{Attribute, Token};

mod input;
mod literals;
mod serde_attrs;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use input::{FieldShape, ParsedField, ParsedInput, parse_input};
use literals::lit_str;
use serde_attrs::{serde_display_name, serde_rename_all};
use type_utils::is_indirection;

/// Struct-level attributes recognised by `#[derive(Configurable)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[confill(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `confill::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(Configurable)]`.
///
/// - `nested` expands the field's own declarations in place.
/// - `skip` keeps the field out of the engine's view.
/// - `tag(ns = "value")` records a directive tag; repeated namespaces keep
///   every value in declaration order.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldAttrs {
    pub nested: bool,
    pub skip: bool,
    pub tags: Vec<(String, String)>,
}

/// Iterate all `#[confill(...)]` attributes once and apply a callback.
fn parse_confill<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("confill")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Extracts `#[confill(...)]` metadata applied to a struct.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_confill(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            return Ok(());
        }
        discard_unknown(meta)
    })?;
    Ok(out)
}

/// Parses `tag(ns = "value", ...)` into `tags`.
fn parse_tag_list(meta: &ParseNestedMeta, tags: &mut Vec<(String, String)>) -> syn::Result<()> {
    meta.parse_nested_meta(|nested| {
        let Some(ident) = nested.path.get_ident() else {
            return Err(nested.error("tag namespaces must be plain identifiers"));
        };
        let namespace = ident.to_string();
        let value = lit_str(&nested, &namespace)?;
        tags.push((namespace, value.value()));
        Ok(())
    })
}

/// Applies a recognised field attribute, returning `true` if handled.
fn apply_field_attr(meta: &ParseNestedMeta, out: &mut FieldAttrs) -> syn::Result<bool> {
    let Some(ident) = meta.path.get_ident() else {
        return Ok(false);
    };
    match ident.to_string().as_str() {
        "nested" => {
            out.nested = true;
            Ok(true)
        }
        "skip" => {
            out.skip = true;
            Ok(true)
        }
        "tag" => {
            parse_tag_list(meta, &mut out.tags)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Parses field-level `#[confill(...)]` attributes.
///
/// `nested` and `skip` are mutually exclusive: a skipped field is never
/// walked, so asking for its children is a mistake worth reporting.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_confill(&field.attrs, |meta| {
        if !apply_field_attr(meta, &mut out)? {
            discard_unknown(meta)?;
        }
        Ok(())
    })?;
    if out.nested && out.skip {
        return Err(syn::Error::new_spanned(
            field,
            "`nested` and `skip` cannot be combined on the same field",
        ));
    }
    Ok(out)
}

/// Classifies how the engine treats a field.
///
/// Indirections win over `nested`: a record behind `Option` or `Box` is never
/// populated, so marking it nested is rejected rather than silently ignored.
pub(crate) fn classify_field(field: &syn::Field, attrs: &FieldAttrs) -> syn::Result<FieldShape> {
    if attrs.skip {
        return Ok(FieldShape::Opaque);
    }
    if is_indirection(&field.ty) {
        if attrs.nested {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "`nested` fields must hold the record directly, not behind an indirection",
            ));
        }
        return Ok(FieldShape::Indirect);
    }
    if attrs.nested {
        return Ok(FieldShape::Record);
    }
    Ok(FieldShape::Leaf)
}
