//! Peano number aliases.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse::Parse, parse::ParseStream, LitInt};

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(PeanoInput { max })
    }
}

/// `D0 = Z`, then `Dn = S<D(n-1)>` up to `max`.
pub fn expand_peano(input: PeanoInput) -> TokenStream {
    let aliases = (0..=input.max).map(|n| {
        let name = format_ident!("D{}", n);
        let doc = format!("The Peano number {n}, also the index of the element at position {n}.");
        let body = if n == 0 {
            quote! { Z }
        } else {
            let prev = format_ident!("D{}", n - 1);
            quote! { S<#prev> }
        };
        quote! {
            #[doc = #doc]
            pub type #name = #body;
        }
    });

    quote! { #(#aliases)* }
}
