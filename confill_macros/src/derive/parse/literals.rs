//! Literal parsing helpers for derive attributes.

use syn::{Lit, LitStr};

/// Parses a literal from an attribute value using `extractor`.
fn parse_lit<T, F>(meta: &syn::meta::ParseNestedMeta, key: &str, extractor: F) -> syn::Result<T>
where
    F: FnOnce(Lit) -> Option<T>,
{
    let literal = meta.value()?.parse::<Lit>()?;
    let span = literal.span();
    extractor(literal).ok_or_else(|| {
        let type_name = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("literal")
            .to_lowercase();
        let display_type = match type_name.as_str() {
            "litstr" => "string",
            other => other,
        };
        syn::Error::new(span, format!("{key} must be a {display_type}"))
    })
}

/// Parses a string literal from an attribute value.
///
/// # Examples
///
/// ```rust,ignore
/// let attr: syn::Attribute = syn::parse_quote!(#[confill(crate = "alias")]);
/// attr.parse_nested_meta(|meta| {
///     let s = lit_str(&meta, "crate")?;
///     assert_eq!(s.value(), "alias");
///     Ok(())
/// })?;
/// ```
pub(crate) fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    parse_lit(meta, key, |lit| match lit {
        Lit::Str(s) => Some(s),
        _ => None,
    })
}
