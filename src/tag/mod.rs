//! # Layer 1: Type Tags
//!
//! Every type placed in a resource set carries a type-level identity through
//! the [`Resource`] trait. Identities are structural:
//!
//! ```text
//! i32              -> Named<stream("…::i32")>
//! Rc<Cell<char>>   -> Applied<stream("Rc"), [Applied<stream("Cell"), [Named<stream("…::char")>]>]>
//! &'a mut Config   -> Applied<stream("&mut"), [Named<stream("my_app::Config")>]>
//! ```
//!
//! Streams are 64-bit FNV-1a hashes of the type's path, compared nibble by
//! nibble. Lifetimes never enter an identity, so `&'a mut T` and `&'b mut T`
//! are the same tag.
//!
//! Identity equality is only the first gate: every operation that hands a
//! value out also requires the Rust types to be identical, so two distinct
//! types whose hashes collide fail to build instead of being confused.

use core::marker::PhantomData;

use crate::primitives::{Absent, Bool, DefaultMaxDepth, HashStream, Present, StreamEq};

mod std_impls;

/// A type that can be stored in, looked up from, or excluded from a
/// resource set.
///
/// Derive it with `#[derive(Resource)]` or declare ground types with
/// [`impl_resource!`](crate::impl_resource). Primitives and the common
/// core, alloc and std types (containers, smart pointers, tuples up to 12
/// elements, arrays, `dyn Fn`, `dyn Any` and `dyn Error` objects) are
/// already covered.
///
/// The orphan rule keeps a crate from implementing `Resource` for a type it
/// does not own. Wrap a third-party type in a local newtype instead:
///
/// ```
/// # #![recursion_limit = "256"]
/// use shared_resources::prelude::*;
///
/// # mod upstream { pub struct Pool; }
/// #[derive(Resource)]
/// struct DbPool(upstream::Pool);
///
/// let resources = SharedResources::<type_set![DbPool, u16]>::new((5432u16, DbPool(upstream::Pool)));
/// let DbPool(_pool) = resources.get::<DbPool>();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a resource tag",
    label = "`{Self}` does not implement `Resource`",
    note = "add `#[derive(Resource)]` to the type, or declare it with `impl_resource!`"
)]
pub trait Resource {
    /// Type-level identity: [`Named`] or [`Applied`].
    type Id;
}

/// Identity of a ground type.
pub struct Named<S>(PhantomData<S>);

/// Identity of a type constructor applied to the identities in `Args`.
pub struct Applied<S, Args>(PhantomData<(S, Args)>);

/// End of an identity argument list.
pub struct IdNil;

/// Identity argument list cell.
pub struct IdCons<H, T>(PhantomData<(H, T)>);

/// Structural identity equality.
pub trait IdEq<Other> {
    type Out: Bool;
}

impl<A, B> IdEq<Named<B>> for Named<A>
where
    A: HashStream + StreamEq<B, DefaultMaxDepth>,
    B: HashStream,
{
    type Out = <A as StreamEq<B, DefaultMaxDepth>>::Out;
}

impl<A, B, Args> IdEq<Applied<B, Args>> for Named<A> {
    type Out = Absent;
}

impl<A, Args, B> IdEq<Named<B>> for Applied<A, Args> {
    type Out = Absent;
}

impl<A, ArgsA, B, ArgsB> IdEq<Applied<B, ArgsB>> for Applied<A, ArgsA>
where
    A: HashStream + StreamEq<B, DefaultMaxDepth>,
    B: HashStream,
    ArgsA: IdEq<ArgsB>,
{
    type Out = <<A as StreamEq<B, DefaultMaxDepth>>::Out as Bool>::And<<ArgsA as IdEq<ArgsB>>::Out>;
}

impl IdEq<IdNil> for IdNil {
    type Out = Present;
}

impl<H, T> IdEq<IdCons<H, T>> for IdNil {
    type Out = Absent;
}

impl<H, T> IdEq<IdNil> for IdCons<H, T> {
    type Out = Absent;
}

impl<H1, T1, H2, T2> IdEq<IdCons<H2, T2>> for IdCons<H1, T1>
where
    H1: IdEq<H2>,
    T1: IdEq<T2>,
{
    type Out = <<H1 as IdEq<H2>>::Out as Bool>::And<<T1 as IdEq<T2>>::Out>;
}

/// Tag equality: `Present` iff `Self` and `Other` are the same resource type.
pub trait SameTag<Other: ?Sized> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<A, B> SameTag<B> for A
where
    A: Resource + ?Sized,
    B: Resource + ?Sized,
    A::Id: IdEq<B::Id>,
{
    type Out = <A::Id as IdEq<B::Id>>::Out;
}

/// Declare ground types owned by the calling crate as resources.
///
/// The identity is derived from `module_path!()` and the spelled type, so
/// invoke it once per type, next to the type's definition.
///
/// ```
/// use shared_resources::{impl_resource, SameTag};
///
/// pub struct Port(pub u16);
/// pub struct Host(pub &'static str);
/// impl_resource!(Port, Host);
///
/// assert!(<Port as SameTag<Port>>::VALUE);
/// assert!(!<Port as SameTag<Host>>::VALUE);
/// ```
#[macro_export]
macro_rules! impl_resource {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Resource for $ty {
                type Id = $crate::Named<$crate::tag_stream!(concat!(module_path!(), "::", stringify!($ty)))>;
            }
        )+
    };
}
