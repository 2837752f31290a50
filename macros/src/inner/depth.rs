//! Depth alias generation.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, Ident, LitInt};

pub struct DepthInput {
    pub max: usize,
}

impl Parse for DepthInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max == 0 {
            return Err(syn::Error::new(lit.span(), "depth must be at least 1"));
        }
        Ok(DepthInput { max })
    }
}

pub fn expand_depths(input: DepthInput) -> TokenStream {
    let mut aliases = vec![quote! {
        #[doc = "Depth 0."]
        pub type D0 = Z;
    }];

    for n in 1..=input.max {
        let curr = Ident::new(&format!("D{n}"), Span::call_site());
        let prev = Ident::new(&format!("D{}", n - 1), Span::call_site());
        let doc = format!("Depth {n}.");
        aliases.push(quote! {
            #[doc = #doc]
            pub type #curr = S<#prev>;
        });
    }

    quote! { #(#aliases)* }
}
