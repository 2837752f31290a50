//! `type_set!` input parsing and expansion.

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Token, Type,
};

pub struct TypeSetInput {
    pub types: Punctuated<Type, Token![,]>,
}

impl Parse for TypeSetInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let types = Punctuated::parse_terminated(input)?;
        Ok(TypeSetInput { types })
    }
}

/// Reject types spelled twice. Aliases that resolve to the same type are
/// caught later by the `Unique` bound on the containers.
pub fn check_duplicates(types: &[Type]) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for ty in types {
        let spelled = ty.to_token_stream().to_string().replace(' ', "");
        if !seen.insert(spelled.clone()) {
            return Err(syn::Error::new_spanned(
                ty,
                format!(
                    "duplicate type `{spelled}` in type set\n\
                     \n\
                     Each type may appear only once; a repeated type makes lookup by type ambiguous."
                ),
            ));
        }
    }
    Ok(())
}

/// `[A, B]` -> `Cons<A, Cons<B, Nil>>`
pub fn build_type_set(types: &[Type]) -> TokenStream2 {
    types.iter().rev().fold(quote! { ::shared_resources::Nil }, |tail, ty| {
        quote! { ::shared_resources::Cons<#ty, #tail> }
    })
}

pub fn expand_type_set(input: TypeSetInput) -> TokenStream2 {
    let types: Vec<Type> = input.types.into_iter().collect();
    if let Err(err) = check_duplicates(&types) {
        return err.to_compile_error();
    }
    build_type_set(&types)
}
