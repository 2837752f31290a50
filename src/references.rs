//! # Layer 5: Referencing Container
//!
//! [`SharedReferences<'a, L, E>`] holds one `&'a mut T` handle per type of
//! the effective set instead of the values. Writes go to the referents; the
//! borrow checker keeps the referents alive and unaliased for `'a`.
//!
//! ```
//! # #![recursion_limit = "256"]
//! use shared_resources::{type_set, SharedReferences};
//!
//! type All = type_set![i32, char];
//!
//! let (mut n, mut c) = (1i32, 'a');
//! {
//!     let mut refs: SharedReferences<'_, All> = SharedReferences::new((&mut c, &mut n));
//!     *refs.get_mut::<i32>() += 1;
//!     *refs.reborrow().get_mut::<char>() = 'b';
//! }
//! assert_eq!((n, c), (2, 'b'));
//! ```
//!
//! A container cannot outlive what it points at:
//!
//! ```compile_fail
//! # #![recursion_limit = "256"]
//! use shared_resources::{type_set, SharedReferences};
//! let refs: SharedReferences<'_, type_set![i32]> = {
//!     let mut n = 1i32;
//!     SharedReferences::new((&mut n,))
//! };
//! let _ = refs.get::<i32>();
//! ```
//!
//! Two containers are never live over the same referents at once; the
//! second one is a reborrow and blocks the first until it is dropped:
//!
//! ```compile_fail
//! # #![recursion_limit = "256"]
//! use shared_resources::{type_set, SharedReferences};
//! let mut n = 1i32;
//! let mut refs: SharedReferences<'_, type_set![i32]> = SharedReferences::new((&mut n,));
//! let inner = refs.reborrow();
//! *refs.get_mut::<i32>() += 1;
//! let _ = inner.get::<i32>();
//! ```
//!
//! Conversion needs the same effective set:
//!
//! ```compile_fail
//! # #![recursion_limit = "256"]
//! use shared_resources::{type_set, SharedReferences};
//! let (mut n, mut c) = (1i32, 'a');
//! let refs: SharedReferences<'_, type_set![i32, char]> = SharedReferences::new((&mut n, &mut c));
//! let _: SharedReferences<'_, type_set![i32]> = SharedReferences::convert(refs);
//! ```

use core::fmt;

use crate::resources::SharedResources;
use crate::set::{Cons, Effective, Equivalent, IntoList, Nil, Subtract, TypeList, Unique};
use crate::storage::{DebugBindings, Merge, Sculpt, Select};
use crate::trace;

/// Maps a type set to the chain of `&'a mut` handles to its types, for any
/// `'a`.
pub trait Handles {
    type Out<'a>: TypeList
    where
        Self: 'a;

    /// Re-borrow every handle of a chain for the shorter lifetime `'s`.
    fn reborrow<'s, 'a: 's>(handles: &'s mut Self::Out<'a>) -> Self::Out<'s>
    where
        Self: 'a;
}

impl Handles for Nil {
    type Out<'a> = Nil;

    #[inline(always)]
    fn reborrow<'s, 'a: 's>(_handles: &'s mut Nil) -> Nil {
        Nil
    }
}

impl<H, R: Handles> Handles for Cons<H, R> {
    type Out<'a>
        = Cons<&'a mut H, R::Out<'a>>
    where
        Self: 'a;

    #[inline(always)]
    fn reborrow<'s, 'a: 's>(handles: &'s mut Self::Out<'a>) -> Self::Out<'s>
    where
        Self: 'a,
    {
        Cons { head: &mut *handles.head, tail: <R as Handles>::reborrow(&mut handles.tail) }
    }
}

/// `L` with every type `T` replaced by `&'a mut T`.
pub type Handled<'a, L> = <L as Handles>::Out<'a>;

/// Handle chain of a `SharedReferences<'a, L, E>`.
pub type HandleSet<'a, L, E> = Handled<'a, Effective<L, E>>;

/// Container of `&'a mut` handles, one per type in `L` minus `E`.
///
/// Handles are exclusive. A second container over the same referents comes
/// from [`reborrow`](Self::reborrow) and holds `self` mutably borrowed, so
/// aliasing containers are only ever used one after the other.
pub struct SharedReferences<'a, L, E = Nil>
where
    L: Subtract<E>,
    Effective<L, E>: Handles + 'a,
{
    handles: HandleSet<'a, L, E>,
}

impl<'a, L, E> SharedReferences<'a, L, E>
where
    L: Subtract<E>,
    Effective<L, E>: Handles + 'a,
{
    /// Number of handles.
    pub const LEN: usize = <HandleSet<'a, L, E> as TypeList>::LEN;

    /// Build from `&'a mut` handles covering the effective set exactly once,
    /// in any order.
    pub fn new<A>(handles: A) -> Self
    where
        L: Unique,
        A: IntoList,
        A::List: Unique + Sculpt<HandleSet<'a, L, E>, Rest = Nil>,
    {
        let (handles, Nil) = <A::List as Sculpt<HandleSet<'a, L, E>>>::sculpt(handles.into_list());
        Self::assemble(handles, "new")
    }

    /// Build from the handles of `base` plus extra handles; `base` wins on
    /// overlap.
    pub fn extend<L2, E2, A>(base: SharedReferences<'a, L2, E2>, handles: A) -> Self
    where
        L: Unique,
        L2: Subtract<E2>,
        Effective<L2, E2>: Handles + 'a,
        A: IntoList,
        A::List: Unique,
        HandleSet<'a, L, E>: Merge<HandleSet<'a, L2, E2>, A::List>,
    {
        let handles = <HandleSet<'a, L, E> as Merge<_, _>>::merge(base.handles, handles.into_list());
        Self::assemble(handles, "extend")
    }

    /// Re-declare with a set of the same members.
    pub fn convert<L2, E2>(other: SharedReferences<'a, L2, E2>) -> Self
    where
        L: Unique,
        L2: Subtract<E2>,
        Effective<L2, E2>: Handles + Equivalent<Effective<L, E>> + 'a,
        HandleSet<'a, L2, E2>: Sculpt<HandleSet<'a, L, E>, Rest = Nil>,
    {
        let (handles, Nil) = <HandleSet<'a, L2, E2> as Sculpt<HandleSet<'a, L, E>>>::sculpt(other.handles);
        Self::assemble(handles, "convert")
    }

    /// Keep the handles this set names, dropping the rest.
    pub fn narrow<L2, E2>(other: SharedReferences<'a, L2, E2>) -> Self
    where
        L: Unique,
        L2: Subtract<E2>,
        Effective<L2, E2>: Handles + 'a,
        HandleSet<'a, L2, E2>: Sculpt<HandleSet<'a, L, E>>,
    {
        let (handles, _dropped) = <HandleSet<'a, L2, E2> as Sculpt<HandleSet<'a, L, E>>>::sculpt(other.handles);
        Self::assemble(handles, "narrow")
    }

    /// A container over the same referents for as long as `self` is
    /// mutably borrowed.
    pub fn reborrow<'b>(&'b mut self) -> SharedReferences<'b, L, E> {
        let handles = <Effective<L, E> as Handles>::reborrow(&mut self.handles);
        SharedReferences::assemble(handles, "reborrow")
    }

    #[inline(always)]
    fn assemble(handles: HandleSet<'a, L, E>, via: &'static str) -> Self {
        trace::assembled::<HandleSet<'a, L, E>>("SharedReferences", via);
        SharedReferences { handles }
    }

    #[inline(always)]
    pub fn get<T: 'a>(&self) -> &T
    where
        HandleSet<'a, L, E>: Select<&'a mut T>,
    {
        &**<HandleSet<'a, L, E> as Select<&'a mut T>>::select(&self.handles)
    }

    #[inline(always)]
    pub fn get_mut<T: 'a>(&mut self) -> &mut T
    where
        HandleSet<'a, L, E>: Select<&'a mut T>,
    {
        &mut **<HandleSet<'a, L, E> as Select<&'a mut T>>::select_mut(&mut self.handles)
    }

    /// The handles as an owning container of `&'a mut` values.
    pub fn into_resources(self) -> SharedResources<HandleSet<'a, L, E>> {
        SharedResources::assemble(self.handles, "into_resources")
    }
}

impl<'a, L, E> fmt::Debug for SharedReferences<'a, L, E>
where
    L: Subtract<E>,
    Effective<L, E>: Handles + 'a,
    HandleSet<'a, L, E>: DebugBindings,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.handles.debug_bindings(&mut map);
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Pair = Cons<i32, Cons<char, Nil>>;

    #[test]
    fn handles_follow_declared_order() {
        let (mut n, mut c) = (1i32, 'a');
        let refs: SharedReferences<'_, Pair> = SharedReferences::new((&mut c, &mut n));
        let Cons { head, tail: Cons { head: ch, tail: Nil } } = refs.into_resources().into_bindings();
        *head = 2;
        *ch = 'b';
        assert_eq!((n, c), (2, 'b'));
    }

    #[test]
    fn len_counts_handles() {
        assert_eq!(SharedReferences::<'static, Pair>::LEN, 2);
        assert_eq!(SharedReferences::<'static, Pair, Cons<i32, Nil>>::LEN, 1);
    }

    #[test]
    fn nested_reborrows_release_the_outer_container() {
        let mut n = 1i32;
        let mut refs: SharedReferences<'_, Pair, Cons<char, Nil>> = SharedReferences::new((&mut n,));
        {
            let mut inner = refs.reborrow();
            *inner.reborrow().get_mut::<i32>() += 10;
            *inner.get_mut::<i32>() += 100;
        }
        *refs.get_mut::<i32>() += 1000;
        assert_eq!(*refs.get::<i32>(), 1111);
        drop(refs);
        assert_eq!(n, 1111);
    }

    #[test]
    fn reborrow_chain_points_at_same_places() {
        let (mut n, mut c) = (1i32, 'a');
        let mut chain: Handled<'_, Pair> = Cons { head: &mut n, tail: Cons { head: &mut c, tail: Nil } };
        let short = <Pair as Handles>::reborrow(&mut chain);
        *short.head = 5;
        *short.tail.head = 'q';
        assert_eq!((*chain.head, *chain.tail.head), (5, 'q'));
    }
}
