//! # Layer 3: Storage Engine
//!
//! A bindings list `Cons<A, Cons<B, Nil>>` stores one value per type, inline
//! and in declaration order. Operations here move values between lists:
//!
//! - [`Pluck`]: take the value of one type out, keeping the rest.
//! - [`Sculpt`]: rearrange a list into a target order, returning leftovers.
//! - [`Select`]: borrow the value of one type.
//! - [`Merge`]: build a target list from two sources, the first preferred.
//!
//! Lookups compare tags for dispatch and then require the stored type and
//! the requested type to be identical, so a value is only ever handed out
//! at its own type.

use core::any::type_name;
use core::fmt;

use crate::set::{Cons, Nil};

mod merge;
mod pluck;
mod select;

pub use merge::{Merge, Prefer};
pub use pluck::{Pluck, PluckAt, Sculpt};
pub use select::{Select, SelectAt};

/// Adds one `type_name => value` entry per binding.
pub trait DebugBindings {
    fn debug_bindings(&self, map: &mut fmt::DebugMap<'_, '_>);
}

impl DebugBindings for Nil {
    #[inline(always)]
    fn debug_bindings(&self, _map: &mut fmt::DebugMap<'_, '_>) {}
}

impl<H: fmt::Debug, R: DebugBindings> DebugBindings for Cons<H, R> {
    fn debug_bindings(&self, map: &mut fmt::DebugMap<'_, '_>) {
        map.entry(&format_args!("{}", type_name::<H>()), &self.head);
        self.tail.debug_bindings(map);
    }
}
