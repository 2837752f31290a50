//! Hash streams for resource identities.
//!
//! A string literal is hashed here and becomes sixteen literal nibbles.
//! Anything else (normally `concat!(module_path!(), ...)`) is left for the
//! compiler: each nibble becomes a const block over `hash_nibble`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;

/// FNV-1a, identical to `shared_resources::primitives::fnv1a_64_str`.
pub fn fnv1a_64(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    s.bytes().fold(OFFSET, |hash, byte| (hash ^ byte as u64).wrapping_mul(PRIME))
}

pub fn nibbles(hash: u64) -> [u8; 16] {
    core::array::from_fn(|i| ((hash >> (i * 4)) & 0xF) as u8)
}

pub fn expand_tag_stream(input: TokenStream) -> TokenStream {
    if let Ok(lit) = syn::parse2::<LitStr>(input.clone()) {
        let nibbles = nibbles(fnv1a_64(&lit.value()));
        return quote! {
            ::shared_resources::primitives::HashStream16<#(#nibbles),*>
        };
    }

    let slots = (0..16u32).map(|i| {
        quote! { { ::shared_resources::primitives::hash_nibble(#input, #i) } }
    });
    quote! {
        ::shared_resources::primitives::HashStream16<#(#slots),*>
    }
}
