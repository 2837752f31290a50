use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, DeriveInput, GenericParam};

/// `#[derive(Resource)]`
///
/// Ground types get `Named<stream>`; generic types get
/// `Applied<stream, [T::Id, ...]>` over their type parameters, so
/// `Wrapper<i32>` and `Wrapper<u32>` are distinct tags. The stream hashes
/// `concat!(module_path!(), "::", Name)`, which the compiler expands before
/// `tag_stream!` sees it.
pub fn expand_derive_resource(input: DeriveInput) -> TokenStream2 {
    if let Some(GenericParam::Const(param)) = input
        .generics
        .params
        .iter()
        .find(|p| matches!(p, GenericParam::Const(_)))
    {
        return syn::Error::new_spanned(
            param,
            "`Resource` cannot be derived for types with const parameters\n\
             \n\
             Implement `Resource` by hand, folding the constant into the identity stream.",
        )
        .to_compile_error();
    }

    let ident = &input.ident;
    let name = ident.to_string();

    let mut generics = input.generics.clone();
    let params: Vec<_> = generics.type_params().map(|p| p.ident.clone()).collect();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::shared_resources::Resource));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let stream = quote! {
        ::shared_resources::tag_stream!(concat!(module_path!(), "::", #name))
    };
    let id = if params.is_empty() {
        quote! { ::shared_resources::Named<#stream> }
    } else {
        let args = params.iter().rev().fold(quote! { ::shared_resources::IdNil }, |tail, p| {
            quote! { ::shared_resources::IdCons<<#p as ::shared_resources::Resource>::Id, #tail> }
        });
        quote! { ::shared_resources::Applied<#stream, #args> }
    };

    quote! {
        impl #impl_generics ::shared_resources::Resource for #ident #ty_generics #where_clause {
            type Id = #id;
        }
    }
}
