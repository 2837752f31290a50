use crate::primitives::{Absent, Present};
use crate::set::{Cons, Nil};
use crate::tag::SameTag;

/// Remove the value of type `T` from a bindings list.
#[diagnostic::on_unimplemented(
    message = "no value of type `{T}` is available in `{Self}`",
    label = "`{T}` is not supplied",
    note = "every type of the target set must be supplied exactly once, by argument or by a base container"
)]
pub trait Pluck<T> {
    type Rest;

    fn pluck(self) -> (T, Self::Rest);
}

impl<T, H, R> Pluck<T> for Cons<H, R>
where
    T: SameTag<H>,
    <T as SameTag<H>>::Out: PluckAt<T, H, R>,
{
    type Rest = <<T as SameTag<H>>::Out as PluckAt<T, H, R>>::Rest;

    #[inline(always)]
    fn pluck(self) -> (T, Self::Rest) {
        <<T as SameTag<H>>::Out as PluckAt<T, H, R>>::pluck_at(self.head, self.tail)
    }
}

/// Dispatch on whether the head is the wanted type.
pub trait PluckAt<T, H, R> {
    type Rest;

    fn pluck_at(head: H, tail: R) -> (T, Self::Rest);
}

// Tags match: the head must be `T` itself.
impl<T, R> PluckAt<T, T, R> for Present {
    type Rest = R;

    #[inline(always)]
    fn pluck_at(head: T, tail: R) -> (T, R) {
        (head, tail)
    }
}

impl<T, H, R> PluckAt<T, H, R> for Absent
where
    R: Pluck<T>,
{
    type Rest = Cons<H, R::Rest>;

    #[inline(always)]
    fn pluck_at(head: H, tail: R) -> (T, Self::Rest) {
        let (found, rest) = <R as Pluck<T>>::pluck(tail);
        (found, Cons { head, tail: rest })
    }
}

/// Rearrange a bindings list into `Target` order, returning what is left.
pub trait Sculpt<Target> {
    type Rest;

    fn sculpt(self) -> (Target, Self::Rest);
}

impl<S> Sculpt<Nil> for S {
    type Rest = S;

    #[inline(always)]
    fn sculpt(self) -> (Nil, S) {
        (Nil, self)
    }
}

impl<S, H, R> Sculpt<Cons<H, R>> for S
where
    S: Pluck<H>,
    <S as Pluck<H>>::Rest: Sculpt<R>,
{
    type Rest = <<S as Pluck<H>>::Rest as Sculpt<R>>::Rest;

    #[inline(always)]
    fn sculpt(self) -> (Cons<H, R>, Self::Rest) {
        let (head, rest) = <S as Pluck<H>>::pluck(self);
        let (tail, rest) = <<S as Pluck<H>>::Rest as Sculpt<R>>::sculpt(rest);
        (Cons { head, tail }, rest)
    }
}
