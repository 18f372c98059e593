//! Unit tests for the `Configurable` expansion.

use super::expand;
use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

fn expand_to_string(input: &DeriveInput) -> Result<String> {
    let tokens = expand(input).map_err(|err| anyhow!(err))?;
    Ok(tokens.to_string())
}

#[rstest]
fn expansion_declares_fields_in_order() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        pub struct Server {
            pub addr: String,
            pub port: u16,
        }
    };
    let out = expand_to_string(&input)?;
    let addr = out
        .find("\"addr\"")
        .ok_or_else(|| anyhow!("missing addr declaration: {out}"))?;
    let port = out
        .find("\"port\"")
        .ok_or_else(|| anyhow!("missing port declaration: {out}"))?;
    ensure!(addr < port, "declarations out of order: {out}");
    ensure!(
        out.contains("impl :: confill :: Configurable for Server"),
        "missing trait impl: {out}"
    );
    Ok(())
}

#[rstest]
fn nested_fields_delegate_to_the_child_record() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Outer {
            #[confill(nested)]
            pub db: Database,
        }
    };
    let out = expand_to_string(&input)?;
    ensure!(
        out.contains("< Database as :: confill :: Configurable > :: declarations ()"),
        "nested declarations not requested: {out}"
    );
    ensure!(
        out.contains(":: confill :: Configurable :: field_mut (& mut self . db , rest)"),
        "nested accessor not delegated: {out}"
    );
    Ok(())
}

#[rstest]
#[case::option(quote::quote! { pub hidden: Option<String> })]
#[case::boxed(quote::quote! { pub hidden: Box<String> })]
#[case::reference(quote::quote! { pub hidden: &'static str })]
#[case::skipped(quote::quote! {
    #[confill(skip)]
    pub hidden: std::collections::HashMap<String, String>
})]
fn unreachable_fields_have_no_accessor_arm(#[case] field: proc_macro2::TokenStream) -> Result<()> {
    let input: DeriveInput = syn::parse2(quote::quote! {
        struct Holder {
            #field,
        }
    })
    .map_err(|err| anyhow!(err))?;
    let out = expand_to_string(&input)?;
    ensure!(
        !out.contains("self . hidden"),
        "unexpected accessor for hidden field: {out}"
    );
    ensure!(out.contains("let _ = path"), "expected empty accessor: {out}");
    Ok(())
}

#[rstest]
fn crate_alias_replaces_generated_paths() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[confill(crate = "renamed")]
        struct Aliased {
            pub name: String,
        }
    };
    let out = expand_to_string(&input)?;
    ensure!(
        out.contains("impl renamed :: Configurable for Aliased"),
        "alias not applied: {out}"
    );
    ensure!(!out.contains(":: confill ::"), "default path leaked: {out}");
    Ok(())
}

#[rstest]
fn generics_are_forwarded_to_the_impl() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Wrapper<T: Clone> where T: Default {
            pub value: T,
        }
    };
    let out = expand_to_string(&input)?;
    ensure!(
        out.contains("impl < T : Clone > :: confill :: Configurable for Wrapper < T > where T : Default"),
        "generics not forwarded: {out}"
    );
    Ok(())
}

#[rstest]
#[case::enumeration(parse_quote! { enum Mode { A, B } })]
#[case::tuple(parse_quote! { struct Pair(String, u16); })]
fn non_record_inputs_are_rejected(#[case] input: DeriveInput) {
    assert!(expand(&input).is_err());
}

#[rstest]
fn nested_behind_option_is_rejected() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Outer {
            #[confill(nested)]
            pub db: Option<Database>,
        }
    };
    let err = expand(&input)
        .err()
        .ok_or_else(|| anyhow!("expected nested Option to be rejected"))?;
    ensure!(
        err.to_string().contains("indirection"),
        "unexpected error: {err}"
    );
    Ok(())
}
