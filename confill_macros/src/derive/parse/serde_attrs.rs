//! Serde attribute parsing helpers.
//!
//! Display names follow the keys serde reads from a configuration file, so a
//! field renamed for the file decoder is prompted for, and looked up as a flag,
//! under the same name.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Field, LitStr, Token};

/// Supported `#[serde(rename_all = "...")]` rules for struct fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SerdeRenameAll {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl SerdeRenameAll {
    fn parse(value: &LitStr) -> syn::Result<Self> {
        match value.value().as_str() {
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "SCREAMING-KEBAB-CASE" => Ok(Self::ScreamingKebab),
            other => Err(syn::Error::new(
                value.span(),
                format!(
                    "unsupported serde rename_all value '{other}'; expected one of \
\"lowercase\", \"UPPERCASE\", \"PascalCase\", \"camelCase\", \"snake_case\", \
\"SCREAMING_SNAKE_CASE\", \"kebab-case\", or \"SCREAMING-KEBAB-CASE\""
                ),
            )),
        }
    }

    fn apply(self, field_name: &str) -> String {
        match self {
            Self::Lower => field_name.to_ascii_lowercase(),
            Self::Upper => field_name.to_ascii_uppercase(),
            Self::Pascal => field_name.to_upper_camel_case(),
            Self::Camel => field_name.to_lower_camel_case(),
            Self::Snake => field_name.to_snake_case(),
            Self::ScreamingSnake => field_name.to_shouty_snake_case(),
            Self::Kebab => field_name.to_kebab_case(),
            Self::ScreamingKebab => field_name.to_shouty_kebab_case(),
        }
    }
}

/// Parse `#[serde(rename_all = "...")]` from struct attributes.
///
/// The `rename_all(deserialize = "...")` form is honoured as well since the
/// file decoder deserializes.
pub(crate) fn serde_rename_all(attrs: &[Attribute]) -> syn::Result<Option<SerdeRenameAll>> {
    let mut out = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("rename_all") {
                return super::discard_unknown(&meta);
            }
            let mut rule = None;
            parse_directional(&meta, &mut rule)?;
            if let Some(lit) = rule {
                out = Some(SerdeRenameAll::parse(&lit)?);
            }
            Ok(())
        })?;
    }
    Ok(out)
}

/// Parse `#[serde(rename = "...")]` (and `rename(deserialize = "...")`) from
/// field attributes.
pub(crate) fn serde_field_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut out = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("rename") {
                return super::discard_unknown(&meta);
            }
            let mut rename = None;
            parse_directional(&meta, &mut rename)?;
            if let Some(lit) = rename {
                out = Some(lit.value());
            }
            Ok(())
        })?;
    }
    Ok(out)
}

/// Reads either `key = "..."` or `key(deserialize = "...")`.
fn parse_directional(meta: &ParseNestedMeta, out: &mut Option<LitStr>) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        *out = Some(meta.value()?.parse::<LitStr>()?);
        return Ok(());
    }
    if !meta.input.peek(syn::token::Paren) {
        return Ok(());
    }
    meta.parse_nested_meta(|nested| {
        if !nested.path.is_ident("deserialize") {
            return super::discard_unknown(&nested);
        }
        *out = Some(nested.value()?.parse::<LitStr>()?);
        Ok(())
    })
}

/// Compute the name serde expects for `field` given an optional
/// container-level rename rule.
pub(crate) fn serde_display_name(
    field: &Field,
    rename_all: Option<SerdeRenameAll>,
) -> syn::Result<String> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(
            field,
            "unnamed fields are not supported",
        ));
    };
    if let Some(rename) = serde_field_rename(&field.attrs)? {
        return Ok(rename);
    }
    let field_name = ident.unraw().to_string();
    Ok(match rename_all {
        Some(rule) => rule.apply(&field_name),
        None => field_name,
    })
}
