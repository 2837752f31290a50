//! Membership, subset, set equality, uniqueness and difference.

use crate::primitives::{Absent, Bool, Present};
use crate::tag::SameTag;

use super::list::{Cons, Nil, TypeList};

// =============================================================================
// Membership
// =============================================================================

/// `Present` iff some element of `Self` has the same tag as `T`.
pub trait Contains<T> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<T> Contains<T> for Nil {
    type Out = Absent;
}

impl<T, H, R> Contains<T> for Cons<H, R>
where
    T: SameTag<H>,
    R: Contains<T>,
{
    type Out = <<T as SameTag<H>>::Out as Bool>::Or<<R as Contains<T>>::Out>;
}

/// `Present` iff every element of `Sub` is in `Self`.
pub trait ContainsAll<Sub> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<S> ContainsAll<Nil> for S {
    type Out = Present;
}

impl<S, H, R> ContainsAll<Cons<H, R>> for S
where
    S: Contains<H> + ContainsAll<R>,
{
    type Out = <<S as Contains<H>>::Out as Bool>::And<<S as ContainsAll<R>>::Out>;
}

/// Mutual inclusion: same members, any order.
pub trait SameSet<Other> {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl<A, B> SameSet<B> for A
where
    A: ContainsAll<B>,
    B: ContainsAll<A>,
{
    type Out = <<A as ContainsAll<B>>::Out as Bool>::And<<B as ContainsAll<A>>::Out>;
}

/// `Present` iff no tag occurs twice.
pub trait Distinct {
    type Out: Bool;
    const VALUE: bool = <Self::Out as Bool>::VALUE;
}

impl Distinct for Nil {
    type Out = Present;
}

impl<H, R> Distinct for Cons<H, R>
where
    R: Contains<H> + Distinct,
{
    type Out = <<<R as Contains<H>>::Out as Bool>::Not as Bool>::And<<R as Distinct>::Out>;
}

// =============================================================================
// Construction
// =============================================================================

/// `Cons<T, Self>`.
pub trait Prepend<T> {
    type Out: TypeList;
}

impl<L: TypeList, T> Prepend<T> for L {
    type Out = Cons<T, L>;
}

/// `Self` with every element tagged like `T` removed; order kept.
pub trait Without<T> {
    type Out: TypeList;
}

impl<T> Without<T> for Nil {
    type Out = Nil;
}

impl<T, H, R> Without<T> for Cons<H, R>
where
    T: SameTag<H>,
    R: Without<T>,
    <T as SameTag<H>>::Out: KeepUnless<H, <R as Without<T>>::Out>,
{
    type Out = <<T as SameTag<H>>::Out as KeepUnless<H, <R as Without<T>>::Out>>::Out;
}

/// Drops `H` on `Present`, keeps it in front of `Rest` on `Absent`.
pub trait KeepUnless<H, Rest> {
    type Out: TypeList;
}

impl<H, Rest: TypeList> KeepUnless<H, Rest> for Present {
    type Out = Rest;
}

impl<H, Rest: TypeList> KeepUnless<H, Rest> for Absent {
    type Out = <Rest as Prepend<H>>::Out;
}

/// `Self` minus every element of `Excl`. Exclusions absent from `Self` are
/// ignored.
pub trait Subtract<Excl> {
    type Out: TypeList;
}

impl<L: TypeList> Subtract<Nil> for L {
    type Out = L;
}

impl<L, E, ER> Subtract<Cons<E, ER>> for L
where
    L: Without<E>,
    <L as Without<E>>::Out: Subtract<ER>,
{
    type Out = <<L as Without<E>>::Out as Subtract<ER>>::Out;
}

/// The effective set of a container declared over `L` excluding `E`.
pub type Effective<L, E> = <L as Subtract<E>>::Out;

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::marker::PhantomData;

    type All = Cons<i32, Cons<char, Cons<Option<i32>, Cons<Option<char>, Nil>>>>;
    type Shuffled = Cons<Option<char>, Cons<i32, Cons<char, Cons<Option<i32>, Nil>>>>;

    fn same_type<T>(_: PhantomData<T>, _: PhantomData<T>) {}

    #[test]
    fn membership() {
        assert!(<All as Contains<char>>::VALUE);
        assert!(<All as Contains<Option<char>>>::VALUE);
        assert!(!<All as Contains<u8>>::VALUE);
        assert!(!<All as Contains<Cell<i32>>>::VALUE);
        assert!(!<Nil as Contains<i32>>::VALUE);
    }

    #[test]
    fn subset_and_equality_ignore_order() {
        assert!(<All as ContainsAll<Shuffled>>::VALUE);
        assert!(<All as SameSet<Shuffled>>::VALUE);
        assert!(<All as ContainsAll<Cons<char, Nil>>>::VALUE);
        assert!(!<Cons<char, Nil> as ContainsAll<All>>::VALUE);
        assert!(!<All as SameSet<Cons<char, Nil>>>::VALUE);
        assert!(<Nil as SameSet<Nil>>::VALUE);
    }

    #[test]
    fn distinctness() {
        assert!(<All as Distinct>::VALUE);
        assert!(<Nil as Distinct>::VALUE);
        assert!(!<Cons<i32, Cons<char, Cons<i32, Nil>>> as Distinct>::VALUE);
    }

    #[test]
    fn difference_keeps_order() {
        same_type(
            PhantomData::<Effective<All, Cons<char, Nil>>>,
            PhantomData::<Cons<i32, Cons<Option<i32>, Cons<Option<char>, Nil>>>>,
        );
        same_type(
            PhantomData::<Effective<All, Cons<Option<char>, Cons<i32, Nil>>>>,
            PhantomData::<Cons<char, Cons<Option<i32>, Nil>>>,
        );
    }

    #[test]
    fn excluding_foreign_tags_is_a_no_op() {
        same_type(PhantomData::<Effective<All, Cons<u64, Nil>>>, PhantomData::<All>);
        same_type(PhantomData::<Effective<All, Nil>>, PhantomData::<All>);
        same_type(PhantomData::<Effective<All, Shuffled>>, PhantomData::<Nil>);
    }
}
