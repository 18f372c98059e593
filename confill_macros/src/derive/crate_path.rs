//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[confill(crate = "...")]` attribute value into the
//! tokens generated code uses in place of a hardcoded `::confill` path.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `::confill` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::confill }, |path| quote! { #path })
}
