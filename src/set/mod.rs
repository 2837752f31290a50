//! # Layer 2: Type-Set Algebra
//!
//! A type set is a list type built from [`Cons`] and [`Nil`]. The same
//! types hold values at runtime (see [`storage`](crate::storage)), so a set
//! and its bindings share one representation.
//!
//! Every query below is answered by the type checker. Results are
//! [`Present`](crate::Present)/[`Absent`](crate::Absent) types with a
//! `VALUE` constant for inspection.
//!
//! Order never matters for membership, subset or equivalence; it matters
//! only for where values sit in memory.

mod algebra;
mod list;
mod tuple;
mod verdict;

pub use algebra::{
    Contains, ContainsAll, Distinct, Effective, KeepUnless, Prepend, SameSet, Subtract, Without,
};
pub use list::{Cons, Nil, TypeList};
pub use tuple::IntoList;
pub use verdict::{Equivalent, NoDuplicates, SameMembers, Unique};
