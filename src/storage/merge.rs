use crate::primitives::{Absent, Present};
use crate::set::{Cons, Contains, Nil};

use super::pluck::Pluck;

/// Build `Self` taking each value from `preferred` when it has one, else
/// from `fallback`. Values neither list is asked for are dropped.
#[diagnostic::on_unimplemented(
    message = "cannot assemble `{Self}` from `{A}` and `{B}`",
    label = "some type of the target is supplied by neither",
    note = "every type of the target set must come from the base container or the extra arguments"
)]
pub trait Merge<A, B>: Sized {
    fn merge(preferred: A, fallback: B) -> Self;
}

impl<A, B> Merge<A, B> for Nil {
    #[inline(always)]
    fn merge(_preferred: A, _fallback: B) -> Self {
        Nil
    }
}

impl<H, R, A, B> Merge<A, B> for Cons<H, R>
where
    A: Contains<H>,
    <A as Contains<H>>::Out: Prefer<H, A, B>,
    R: Merge<
            <<A as Contains<H>>::Out as Prefer<H, A, B>>::RestA,
            <<A as Contains<H>>::Out as Prefer<H, A, B>>::RestB,
        >,
{
    #[inline(always)]
    fn merge(preferred: A, fallback: B) -> Self {
        let (head, preferred, fallback) =
            <<A as Contains<H>>::Out as Prefer<H, A, B>>::take(preferred, fallback);
        Cons { head, tail: R::merge(preferred, fallback) }
    }
}

/// Which source supplies `H`.
pub trait Prefer<H, A, B> {
    type RestA;
    type RestB;

    fn take(preferred: A, fallback: B) -> (H, Self::RestA, Self::RestB);
}

impl<H, A: Pluck<H>, B> Prefer<H, A, B> for Present {
    type RestA = A::Rest;
    type RestB = B;

    #[inline(always)]
    fn take(preferred: A, fallback: B) -> (H, A::Rest, B) {
        let (head, preferred) = <A as Pluck<H>>::pluck(preferred);
        (head, preferred, fallback)
    }
}

impl<H, A, B: Pluck<H>> Prefer<H, A, B> for Absent {
    type RestA = A;
    type RestB = B::Rest;

    #[inline(always)]
    fn take(preferred: A, fallback: B) -> (H, A, B::Rest) {
        let (head, fallback) = <B as Pluck<H>>::pluck(fallback);
        (head, preferred, fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_wins_and_leftovers_drop() {
        let base = Cons::new(1i32, Cons::new('a', Cons::new(9u64, Nil)));
        let extra = Cons::new(7i32, Cons::new(2u8, Nil));
        let merged: Cons<u8, Cons<i32, Cons<char, Nil>>> = Merge::merge(base, extra);
        assert_eq!(merged, Cons::new(2u8, Cons::new(1i32, Cons::new('a', Nil))));
    }
}
