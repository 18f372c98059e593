//! Input parsing for the `Configurable` derive macro.
//!
//! Gathers the struct identifier, generics, attributes, and every field's
//! classification in one pass so expansion can fail fast with useful spans.

use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Visibility};

use super::{
    FieldAttrs, StructAttrs, classify_field, parse_field_attrs, parse_struct_attrs,
    serde_display_name, serde_rename_all,
};

/// How the engine treats a declared field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FieldShape {
    /// A value the engine may populate.
    Leaf,
    /// A field behind `Option`, `Box`, a reference, and similar.
    Indirect,
    /// A field excluded with `#[confill(skip)]`.
    Opaque,
    /// A record expanded with `#[confill(nested)]`.
    Record,
}

/// One parsed struct field.
pub(crate) struct ParsedField {
    pub ident: Ident,
    pub ty: Type,
    pub display_name: String,
    pub visible: bool,
    pub attrs: FieldAttrs,
    pub shape: FieldShape,
}

/// The derive input reduced to what expansion needs.
pub(crate) struct ParsedInput {
    pub ident: Ident,
    pub generics: Generics,
    pub struct_attrs: StructAttrs,
    pub fields: Vec<ParsedField>,
}

/// Gathers information from the user-provided struct.
///
/// Only structs with named fields are accepted; anything else is the
/// compile-time form of an invalid destination.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unit => {
                return Ok(ParsedInput {
                    ident: input.ident.clone(),
                    generics: input.generics.clone(),
                    struct_attrs,
                    fields: Vec::new(),
                });
            }
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Configurable requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Configurable can only be derived for structs",
            ));
        }
    };

    let rename_all = serde_rename_all(&input.attrs)?;
    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "unnamed fields are not supported"));
        };
        let attrs = parse_field_attrs(field)?;
        let shape = classify_field(field, &attrs)?;
        fields.push(ParsedField {
            ident,
            ty: field.ty.clone(),
            display_name: serde_display_name(field, rename_all)?,
            visible: !matches!(field.vis, Visibility::Inherited),
            attrs,
            shape,
        });
    }

    Ok(ParsedInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        struct_attrs,
        fields,
    })
}
