//! Tests for display names derived from serde attributes.

use super::super::*;
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

fn names(input: &DeriveInput) -> Result<Vec<String>> {
    let parsed = parse_input(input).map_err(|err| anyhow!(err))?;
    Ok(parsed.fields.into_iter().map(|f| f.display_name).collect())
}

#[rstest]
fn defaults_to_field_identifier() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            pub db_name: String,
            pub r#type: String,
        }
    };
    let got = names(&input)?;
    ensure!(got == ["db_name", "type"], "unexpected names: {got:?}");
    Ok(())
}

#[rstest]
#[case::plain(parse_quote! { struct Demo { #[serde(rename = "DBName")] pub db_name: String } })]
#[case::directional(parse_quote! {
    struct Demo { #[serde(rename(serialize = "ignored", deserialize = "DBName"))] pub db_name: String }
})]
fn honours_field_rename(#[case] input: DeriveInput) -> Result<()> {
    let got = names(&input)?;
    ensure!(got == ["DBName"], "unexpected names: {got:?}");
    Ok(())
}

#[rstest]
#[case("PascalCase", "DbName")]
#[case("camelCase", "dbName")]
#[case("kebab-case", "db-name")]
#[case("SCREAMING_SNAKE_CASE", "DB_NAME")]
fn applies_container_rename_all(#[case] rule: &str, #[case] expected: &str) -> Result<()> {
    let input: DeriveInput = syn::parse_str(&format!(
        r#"
        #[serde(rename_all = "{rule}")]
        struct Demo {{
            pub db_name: String,
        }}
        "#
    ))
    .map_err(|err| anyhow!(err))?;
    let got = names(&input)?;
    ensure!(got == [expected], "rule {rule}: unexpected names {got:?}");
    Ok(())
}

#[rstest]
fn field_rename_beats_rename_all() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[serde(rename_all = "UPPERCASE")]
        struct Demo {
            #[serde(default, rename = "Exact")]
            pub value: String,
            pub other: String,
        }
    };
    let got = names(&input)?;
    ensure!(got == ["Exact", "OTHER"], "unexpected names: {got:?}");
    Ok(())
}

#[rstest]
fn unsupported_rename_all_is_an_error() {
    let input: DeriveInput = parse_quote! {
        #[serde(rename_all = "Train-Case")]
        struct Demo { pub value: String }
    };
    assert!(parse_input(&input).is_err());
}
