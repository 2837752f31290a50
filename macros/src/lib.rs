//! Procedural macros for `shared-resources`.
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `type_set![..]` | - | Build a type-set type |
//! | `#[derive(Resource)]` | struct/enum | Give a type a tag identity |
//! | `tag_stream!(..)` | - | Hash a path into an identity stream |
//! | `depths!(N)` | - | Depth aliases, used internally |

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod inner;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate depth aliases `D0 = Z, D1 = S<D0>, ..., DN = S<D(N-1)>`.
///
/// ```ignore
/// depths!(16);
/// ```
#[proc_macro]
pub fn depths(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::depth::DepthInput);
    inner::depth::expand_depths(input).into()
}

/// Build a `HashStream16` from a string literal or a `&'static str`
/// const expression such as `concat!(module_path!(), "::", "Name")`.
#[proc_macro]
pub fn tag_stream(input: TokenStream) -> TokenStream {
    inner::tag_stream::expand_tag_stream(input.into()).into()
}

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Build a type-set type from a list of types.
///
/// ```ignore
/// type All = type_set![i32, char, Rc<Cell<i32>>];
/// // expands to Cons<i32, Cons<char, Cons<Rc<Cell<i32>>, Nil>>>
/// ```
///
/// A type spelled twice is a compile error.
#[proc_macro]
pub fn type_set(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::type_set::TypeSetInput);
    user::type_set::expand_type_set(input).into()
}

/// Derive a `Resource` identity from the type's module path and name.
///
/// ```ignore
/// #[derive(Resource)]
/// struct Config { port: u16 }
///
/// #[derive(Resource)]
/// struct Wrapper<T>(T); // Wrapper<i32> and Wrapper<u32> are distinct tags
/// ```
#[proc_macro_derive(Resource)]
pub fn derive_resource(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    user::resource::expand_derive_resource(input).into()
}
