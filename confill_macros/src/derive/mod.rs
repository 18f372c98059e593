//! Expansion entry point for `#[derive(Configurable)]`.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
mod generate;
mod parse;
#[cfg(test)]
mod tests;

/// Parses `input` and produces the `Configurable` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    let krate = crate_path::resolve(parsed.struct_attrs.crate_path.as_ref());
    Ok(generate::configurable_impl(&parsed, &krate))
}
