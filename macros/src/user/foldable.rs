use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields};

use crate::common::crate_path;

/// #[derive(Foldable)] tags a struct with `StructTag` and implements
/// `unpack` by moving the fields, in declaration order, into an HList.
pub fn expand_derive_foldable(input: DeriveInput) -> TokenStream2 {
    try_expand(&input).unwrap_or_else(syn::Error::into_compile_error)
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let krate = crate_path();
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "`Foldable` can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "`Foldable` can only be derived for structs",
            ));
        }
    };

    let types: Vec<_> = fields.iter().map(|f| &f.ty).collect();
    let (pattern, bindings) = match fields {
        Fields::Named(named) => {
            let names: Vec<_> = named.named.iter().filter_map(|f| f.ident.clone()).collect();
            (quote! { #ident { #(#names),* } }, names)
        }
        Fields::Unnamed(unnamed) => {
            let names: Vec<_> = (0..unnamed.unnamed.len())
                .map(|i| format_ident!("field_{}", i))
                .collect();
            (quote! { #ident ( #(#names),* ) }, names)
        }
        Fields::Unit => (quote! { _ }, Vec::new()),
    };

    Ok(quote! {
        impl #impl_generics #krate::Tagged for #ident #ty_generics #where_clause {
            type Tag = #krate::ext::StructTag;
        }

        impl #impl_generics #krate::concepts::UnpackImpl<#ident #ty_generics>
            for #krate::ext::StructTag #where_clause
        {
            type Elements = #krate::HList![#(#types),*];

            #[inline]
            fn apply(x: #ident #ty_generics) -> Self::Elements {
                let #pattern = x;
                #krate::hlist![#(#bindings),*]
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_named_fields_in_order() {
        let input: DeriveInput = parse_quote! { struct Point { x: i32, y: u8 } };
        let out = expand_derive_foldable(input).to_string();
        assert!(out.contains("HList ! [i32 , u8]"));
        assert!(out.contains("let Point { x , y } = x ;"));
        assert!(out.contains("hlist ! [x , y]"));
    }

    #[test]
    fn test_tuple_fields() {
        let input: DeriveInput = parse_quote! { struct Pair(u8, char); };
        let out = expand_derive_foldable(input).to_string();
        assert!(out.contains("let Pair (field_0 , field_1) = x ;"));
    }

    #[test]
    fn test_enum_rejected() {
        let input: DeriveInput = parse_quote! { enum Shape { Circle(f64) } };
        let out = expand_derive_foldable(input).to_string();
        assert!(out.contains("compile_error"));
        assert!(out.contains("can only be derived for structs"));
    }
}
