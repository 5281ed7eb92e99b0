//! Attribute helpers shared by the derives.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Type};

/// Path of the runtime crate, as seen from the expansion site.
pub fn crate_path() -> TokenStream {
    quote! { ::tola_concepts }
}

/// The type named by `#[tag(..)]`, if present.
///
/// At most one `#[tag]` is accepted.
pub fn find_tag(attrs: &[Attribute]) -> syn::Result<Option<Type>> {
    let mut found: Option<Type> = None;
    for attr in attrs {
        if !attr.path().is_ident("tag") {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new_spanned(attr, "duplicate `#[tag]` attribute"));
        }
        let ty: Type = attr.parse_args().map_err(|e| {
            syn::Error::new(e.span(), "expected a tag type: `#[tag(MyTag)]`")
        })?;
        found = Some(ty);
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_no_tag() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[derive(Debug)])];
        assert!(find_tag(&attrs).unwrap().is_none());
    }

    #[test]
    fn test_tag_type() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[tag(units::Meters)])];
        let ty = find_tag(&attrs).unwrap().unwrap();
        assert_eq!(quote!(#ty).to_string(), "units :: Meters");
    }

    #[test]
    fn test_duplicate_tag() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[tag(A)]), parse_quote!(#[tag(B)])];
        let err = find_tag(&attrs).unwrap_err();
        assert_eq!(err.to_string(), "duplicate `#[tag]` attribute");
    }

    #[test]
    fn test_empty_tag() {
        let attrs: Vec<Attribute> = vec![parse_quote!(#[tag])];
        assert!(find_tag(&attrs).is_err());
    }
}
