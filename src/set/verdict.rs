//! Build-time verdicts.
//!
//! The algebra computes `Present`/`Absent`; these marker traits turn an
//! `Absent` into a compile error with a readable message.

use crate::primitives::Present;

use super::algebra::{Distinct, SameSet};

#[diagnostic::on_unimplemented(
    message = "the type set `{Set}` contains the same type more than once",
    label = "duplicate type in this set",
    note = "each type may appear only once; a repeated type makes lookup by type ambiguous"
)]
pub trait NoDuplicates<Set> {}

impl<Set> NoDuplicates<Set> for Present {}

/// Implemented by type sets whose tags are pairwise distinct.
pub trait Unique {}

impl<L> Unique for L
where
    L: Distinct,
    <L as Distinct>::Out: NoDuplicates<L>,
{
}

#[diagnostic::on_unimplemented(
    message = "`{A}` and `{B}` are not the same set of types",
    label = "conversion needs identical effective sets",
    note = "use `narrow` to drop bindings, or `extend` to add them"
)]
pub trait SameMembers<A, B> {}

impl<A, B> SameMembers<A, B> for Present {}

/// Implemented when `Self` and `Other` have the same members in any order.
pub trait Equivalent<Other> {}

impl<A, B> Equivalent<B> for A
where
    A: SameSet<B>,
    <A as SameSet<B>>::Out: SameMembers<A, B>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::{Cons, Nil};

    fn unique<L: Unique>() {}
    fn equivalent<A: Equivalent<B>, B>() {}

    #[test]
    fn verdicts_hold() {
        unique::<Nil>();
        unique::<Cons<i32, Cons<char, Nil>>>();
        equivalent::<Cons<i32, Cons<char, Nil>>, Cons<char, Cons<i32, Nil>>>();
    }
}
