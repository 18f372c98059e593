//! Token generation for the `Configurable` implementation.
//!
//! Two pieces are emitted: `declarations()`, mirroring the struct's fields in
//! declaration order, and the `field`/`field_mut` accessors that resolve a
//! path of field indices to a leaf. Indices are positions in the declaring
//! struct, so a path such as `[3, 1]` reads "second field of the record held
//! in the fourth field".

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{FieldShape, ParsedField, ParsedInput};

/// Emits one `FieldDecl` constructor call for `field`.
pub(crate) fn field_declaration(field: &ParsedField, krate: &TokenStream) -> TokenStream {
    let name = &field.display_name;
    let visible = field.visible;
    let tags = field.attrs.tags.iter().map(|(namespace, value)| {
        quote! { (#namespace, #value) }
    });
    let ty = &field.ty;
    let shape = match field.shape {
        FieldShape::Leaf => quote! { #krate::FieldShape::Leaf },
        FieldShape::Indirect => quote! { #krate::FieldShape::Indirect },
        FieldShape::Opaque => quote! { #krate::FieldShape::Opaque },
        FieldShape::Record => quote! {
            #krate::FieldShape::Record(<#ty as #krate::Configurable>::declarations())
        },
    };
    quote! {
        #krate::FieldDecl::new(#name, &[ #( #tags ),* ], #visible, #shape)
    }
}

/// Emits the match arms shared by `field` and `field_mut`.
///
/// `borrow` is either `&` or `&mut`; `accessor` names the trait method used
/// to descend into nested records.
fn access_arms(
    fields: &[ParsedField],
    krate: &TokenStream,
    borrow: &TokenStream,
    accessor: &TokenStream,
    target: &TokenStream,
) -> Vec<TokenStream> {
    fields
        .iter()
        .enumerate()
        .filter_map(|(index, field)| {
            let ident = &field.ident;
            match field.shape {
                FieldShape::Leaf => Some(quote! {
                    #index if rest.is_empty() => ::core::option::Option::Some(
                        #borrow self.#ident as #target
                    ),
                }),
                FieldShape::Record => Some(quote! {
                    #index => #krate::Configurable::#accessor(#borrow self.#ident, rest),
                }),
                FieldShape::Indirect | FieldShape::Opaque => None,
            }
        })
        .collect()
}

/// Emits an accessor body that splits the path and dispatches on its head.
fn accessor_body(arms: &[TokenStream]) -> TokenStream {
    if arms.is_empty() {
        return quote! {
            let _ = path;
            ::core::option::Option::None
        };
    }
    quote! {
        let (head, rest) = path.split_first()?;
        match *head {
            #( #arms )*
            _ => ::core::option::Option::None,
        }
    }
}

/// Generates the full `impl Configurable for ...` block.
pub(crate) fn configurable_impl(parsed: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let ident = &parsed.ident;
    let (impl_generics, ty_generics, where_clause) = parsed.generics.split_for_impl();
    let declarations = parsed
        .fields
        .iter()
        .map(|field| field_declaration(field, krate));

    let shared = quote! { & };
    let exclusive = quote! { &mut };
    let shared_target = quote! { &dyn #krate::FieldValue };
    let exclusive_target = quote! { &mut dyn #krate::FieldValue };
    let field_arms = access_arms(
        &parsed.fields,
        krate,
        &shared,
        &quote! { field },
        &shared_target,
    );
    let field_mut_arms = access_arms(
        &parsed.fields,
        krate,
        &exclusive,
        &quote! { field_mut },
        &exclusive_target,
    );
    let field_body = accessor_body(&field_arms);
    let field_mut_body = accessor_body(&field_mut_arms);

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Configurable for #ident #ty_generics #where_clause {
            fn declarations() -> ::std::vec::Vec<#krate::FieldDecl> {
                ::std::vec![ #( #declarations ),* ]
            }

            fn field(
                &self,
                path: &[usize],
            ) -> ::core::option::Option<&dyn #krate::FieldValue> {
                #field_body
            }

            fn field_mut(
                &mut self,
                path: &[usize],
            ) -> ::core::option::Option<&mut dyn #krate::FieldValue> {
                #field_mut_body
            }
        }
    }
}
