//! Type introspection helpers.
//!
//! The checks are shallow: only the outermost type is inspected, and wrapper
//! recognition looks at the final path segment so fully-qualified spellings
//! such as `std::option::Option<T>` match too.

use syn::{PathArguments, Type};

/// Wrappers treated as indirections: the engine never reaches through them.
const INDIRECT_WRAPPERS: &[&str] = &["Option", "Box", "Rc", "Arc", "Weak"];

/// Returns the last segment's identifier when it carries angle-bracketed
/// arguments, e.g. `Option` for `std::option::Option<u8>`.
fn generic_wrapper(ty: &Type) -> Option<String> {
    let Type::Path(p) = ty else {
        return None;
    };
    if p.qself.is_some() {
        return None;
    }
    let last = p.path.segments.last()?;
    let PathArguments::AngleBracketed(_) = last.arguments else {
        return None;
    };
    Some(last.ident.to_string())
}

/// Returns `true` if `ty` is a reference, raw pointer, or one of the
/// [`INDIRECT_WRAPPERS`].
pub(crate) fn is_indirection(ty: &Type) -> bool {
    match ty {
        Type::Reference(_) | Type::Ptr(_) => true,
        Type::Group(group) => is_indirection(&group.elem),
        Type::Paren(paren) => is_indirection(&paren.elem),
        other => generic_wrapper(other)
            .is_some_and(|wrapper| INDIRECT_WRAPPERS.contains(&wrapper.as_str())),
    }
}
