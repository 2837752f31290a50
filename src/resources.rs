//! # Layer 4: Owning Container
//!
//! [`SharedResources<L, E>`] owns exactly one value of every type in the
//! effective set `L \ E`, stored inline in the declared order of `L`.
//!
//! ```
//! # #![recursion_limit = "256"]
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use shared_resources::{type_set, SharedResources};
//!
//! type All = type_set![i32, char, Rc<Cell<i32>>];
//!
//! // A layer that only knows about `char` and the shared counter.
//! let counter = Rc::new(Cell::new(0));
//! let partial: SharedResources<All, type_set![i32]> = SharedResources::new((counter.clone(), 'x'));
//!
//! // The next layer adds the missing `i32`.
//! let full: SharedResources<All> = SharedResources::extend(partial, (7i32,));
//! assert_eq!(*full.get::<i32>(), 7);
//! assert_eq!(*full.get::<char>(), 'x');
//!
//! full.get::<Rc<Cell<i32>>>().set(3);
//! assert_eq!(counter.get(), 3);
//! ```
//!
//! Every misuse is a build failure. Values must cover the set exactly:
//!
//! ```compile_fail
//! # #![recursion_limit = "256"]
//! use shared_resources::{type_set, SharedResources};
//! let _: SharedResources<type_set![i32, char]> = SharedResources::new((1i32,));
//! ```
//!
//! A type may not be supplied twice:
//!
//! ```compile_fail
//! # #![recursion_limit = "256"]
//! use shared_resources::{type_set, SharedResources};
//! let _: SharedResources<type_set![i32]> = SharedResources::new((1i32, 2i32));
//! ```
//!
//! Sets may not repeat a type, even through aliases:
//!
//! ```compile_fail
//! # #![recursion_limit = "256"]
//! use shared_resources::{Cons, Nil, SharedResources};
//! type Int = i32;
//! let _: SharedResources<Cons<i32, Cons<Int, Nil>>> = SharedResources::new((1i32,));
//! ```
//!
//! Lookups must name a member of the effective set:
//!
//! ```compile_fail
//! # #![recursion_limit = "256"]
//! use shared_resources::{type_set, SharedResources};
//! let r: SharedResources<type_set![i32, char], type_set![char]> = SharedResources::new((1i32,));
//! let _ = r.get::<char>();
//! ```
//!
//! Conversion needs the same effective set:
//!
//! ```compile_fail
//! # #![recursion_limit = "256"]
//! use shared_resources::{type_set, SharedResources};
//! let a: SharedResources<type_set![i32, char]> = SharedResources::new(('a', 1i32));
//! let _: SharedResources<type_set![i32]> = SharedResources::convert(a);
//! ```
//!
//! Extension must cover every type the base leaves out:
//!
//! ```compile_fail
//! # #![recursion_limit = "256"]
//! use shared_resources::{type_set, SharedResources};
//! type All = type_set![i32, char, u8];
//! let partial: SharedResources<All, type_set![i32, char]> = SharedResources::new((1u8,));
//! let _: SharedResources<All> = SharedResources::extend(partial, (1i32,));
//! ```
//!
//! and may not supply a type twice itself:
//!
//! ```compile_fail
//! # #![recursion_limit = "256"]
//! use shared_resources::{type_set, SharedResources};
//! type All = type_set![i32, char];
//! let partial: SharedResources<All, type_set![i32]> = SharedResources::new(('a',));
//! let _: SharedResources<All> = SharedResources::extend(partial, (1i32, 2i32));
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::set::{Effective, Equivalent, IntoList, Nil, Subtract, TypeList, Unique};
use crate::storage::{DebugBindings, Merge, Sculpt, Select};
use crate::trace;

/// Owning container of one value per type in `L` minus `E`.
pub struct SharedResources<L, E = Nil>
where
    L: Subtract<E>,
{
    bindings: Effective<L, E>,
}

impl<L, E> SharedResources<L, E>
where
    L: Subtract<E>,
{
    /// Number of bindings.
    pub const LEN: usize = <Effective<L, E> as TypeList>::LEN;

    /// Build from values covering the effective set exactly once, in any
    /// order.
    pub fn new<A>(values: A) -> Self
    where
        L: Unique,
        A: IntoList,
        A::List: Unique + Sculpt<Effective<L, E>, Rest = Nil>,
    {
        let (bindings, Nil) = <A::List as Sculpt<Effective<L, E>>>::sculpt(values.into_list());
        Self::assemble(bindings, "new")
    }

    /// Build from `base` plus `extras`. A type both supply is taken from
    /// `base`; base bindings outside the effective set are dropped.
    pub fn extend<L2, E2, A>(base: SharedResources<L2, E2>, extras: A) -> Self
    where
        L: Unique,
        L2: Subtract<E2>,
        A: IntoList,
        A::List: Unique,
        Effective<L, E>: Merge<Effective<L2, E2>, A::List>,
    {
        let bindings = <Effective<L, E> as Merge<_, _>>::merge(base.bindings, extras.into_list());
        Self::assemble(bindings, "extend")
    }

    /// Re-declare `other` with a set of the same members, reordering the
    /// bindings to match.
    pub fn convert<L2, E2>(other: SharedResources<L2, E2>) -> Self
    where
        L: Unique,
        L2: Subtract<E2>,
        Effective<L2, E2>: Equivalent<Effective<L, E>> + Sculpt<Effective<L, E>, Rest = Nil>,
    {
        let (bindings, Nil) = <Effective<L2, E2> as Sculpt<Effective<L, E>>>::sculpt(other.bindings);
        Self::assemble(bindings, "convert")
    }

    /// Keep the bindings of `other` that this set names, dropping the rest.
    pub fn narrow<L2, E2>(other: SharedResources<L2, E2>) -> Self
    where
        L: Unique,
        L2: Subtract<E2>,
        Effective<L2, E2>: Sculpt<Effective<L, E>>,
    {
        let (bindings, _dropped) = <Effective<L2, E2> as Sculpt<Effective<L, E>>>::sculpt(other.bindings);
        Self::assemble(bindings, "narrow")
    }

    /// Wrap an already ordered bindings chain.
    pub fn from_bindings(bindings: Effective<L, E>) -> Self
    where
        L: Unique,
    {
        Self::assemble(bindings, "from_bindings")
    }

    #[inline(always)]
    pub(crate) fn assemble(bindings: Effective<L, E>, via: &'static str) -> Self {
        trace::assembled::<Effective<L, E>>("SharedResources", via);
        SharedResources { bindings }
    }

    #[inline(always)]
    pub fn get<T>(&self) -> &T
    where
        Effective<L, E>: Select<T>,
    {
        <Effective<L, E> as Select<T>>::select(&self.bindings)
    }

    #[inline(always)]
    pub fn get_mut<T>(&mut self) -> &mut T
    where
        Effective<L, E>: Select<T>,
    {
        <Effective<L, E> as Select<T>>::select_mut(&mut self.bindings)
    }

    pub fn as_bindings(&self) -> &Effective<L, E> {
        &self.bindings
    }

    pub fn as_bindings_mut(&mut self) -> &mut Effective<L, E> {
        &mut self.bindings
    }

    pub fn into_bindings(self) -> Effective<L, E> {
        self.bindings
    }
}

impl<L, E> Clone for SharedResources<L, E>
where
    L: Subtract<E>,
    Effective<L, E>: Clone,
{
    fn clone(&self) -> Self {
        SharedResources { bindings: self.bindings.clone() }
    }
}

impl<L, E> Copy for SharedResources<L, E>
where
    L: Subtract<E>,
    Effective<L, E>: Copy,
{
}

impl<L, E> Default for SharedResources<L, E>
where
    L: Subtract<E> + Unique,
    Effective<L, E>: Default,
{
    fn default() -> Self {
        Self::assemble(Default::default(), "default")
    }
}

impl<L, E> PartialEq for SharedResources<L, E>
where
    L: Subtract<E>,
    Effective<L, E>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl<L, E> Eq for SharedResources<L, E>
where
    L: Subtract<E>,
    Effective<L, E>: Eq,
{
}

impl<L, E> Hash for SharedResources<L, E>
where
    L: Subtract<E>,
    Effective<L, E>: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bindings.hash(state);
    }
}

impl<L, E> fmt::Debug for SharedResources<L, E>
where
    L: Subtract<E>,
    Effective<L, E>: DebugBindings,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.bindings.debug_bindings(&mut map);
        map.finish()
    }
}
