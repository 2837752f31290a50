use crate::primitives::{Absent, Present};
use crate::set::Cons;
use crate::tag::SameTag;

/// Borrow the value of type `T` in a bindings list.
#[diagnostic::on_unimplemented(
    message = "`{T}` is not part of the bindings `{Self}`",
    label = "no binding for `{T}`",
    note = "only types of the container's effective set can be looked up"
)]
pub trait Select<T> {
    fn select(&self) -> &T;

    fn select_mut(&mut self) -> &mut T;
}

impl<T, H, R> Select<T> for Cons<H, R>
where
    T: SameTag<H>,
    <T as SameTag<H>>::Out: SelectAt<T, H, R>,
{
    #[inline(always)]
    fn select(&self) -> &T {
        <<T as SameTag<H>>::Out as SelectAt<T, H, R>>::select_at(&self.head, &self.tail)
    }

    #[inline(always)]
    fn select_mut(&mut self) -> &mut T {
        <<T as SameTag<H>>::Out as SelectAt<T, H, R>>::select_at_mut(&mut self.head, &mut self.tail)
    }
}

pub trait SelectAt<T, H, R> {
    fn select_at<'s>(head: &'s H, tail: &'s R) -> &'s T;

    fn select_at_mut<'s>(head: &'s mut H, tail: &'s mut R) -> &'s mut T;
}

impl<T, R> SelectAt<T, T, R> for Present {
    #[inline(always)]
    fn select_at<'s>(head: &'s T, _tail: &'s R) -> &'s T {
        head
    }

    #[inline(always)]
    fn select_at_mut<'s>(head: &'s mut T, _tail: &'s mut R) -> &'s mut T {
        head
    }
}

impl<T, H, R> SelectAt<T, H, R> for Absent
where
    R: Select<T>,
{
    #[inline(always)]
    fn select_at<'s>(_head: &'s H, tail: &'s R) -> &'s T {
        <R as Select<T>>::select(tail)
    }

    #[inline(always)]
    fn select_at_mut<'s>(_head: &'s mut H, tail: &'s mut R) -> &'s mut T {
        <R as Select<T>>::select_mut(tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::Nil;

    #[test]
    fn select_reads_and_writes_in_place() {
        let mut list = Cons::new(1i32, Cons::new('a', Nil));
        assert_eq!(*Select::<char>::select(&list), 'a');
        *Select::<i32>::select_mut(&mut list) += 41;
        assert_eq!(list.head, 42);
    }
}
