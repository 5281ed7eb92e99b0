use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

use crate::common::{crate_path, find_tag};

/// #[derive(Tagged)] implements `Tagged`, with the tag named by `#[tag(..)]`
/// or the type itself.
pub fn expand_derive_tagged(input: DeriveInput) -> TokenStream2 {
    try_expand(&input).unwrap_or_else(syn::Error::into_compile_error)
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let krate = crate_path();
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let tag = match find_tag(&input.attrs)? {
        Some(ty) => quote! { #ty },
        None => quote! { Self },
    };

    Ok(quote! {
        impl #impl_generics #krate::Tagged for #ident #ty_generics #where_clause {
            type Tag = #tag;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_own_tag() {
        let input: DeriveInput = parse_quote! { struct Meters(f64); };
        let out = expand_derive_tagged(input).to_string();
        assert!(out.contains("type Tag = Self"));
    }

    #[test]
    fn test_named_tag_with_generics() {
        let input: DeriveInput = parse_quote! {
            #[tag(LengthTag)]
            struct Length<T: Copy> { value: T }
        };
        let out = expand_derive_tagged(input).to_string();
        assert!(out.contains("Tagged for Length < T >"));
        assert!(out.contains("type Tag = LengthTag"));
    }
}
