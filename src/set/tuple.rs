//! Tuples of values as bindings lists.

use super::list::{Cons, Nil, TypeList};

/// Something that can supply values as a bindings list: a tuple of up to
/// twelve values, or a list already.
pub trait IntoList {
    type List: TypeList;

    fn into_list(self) -> Self::List;
}

impl IntoList for () {
    type List = Nil;

    #[inline(always)]
    fn into_list(self) -> Nil {
        Nil
    }
}

impl IntoList for Nil {
    type List = Nil;

    #[inline(always)]
    fn into_list(self) -> Nil {
        self
    }
}

impl<H, T: TypeList> IntoList for Cons<H, T> {
    type List = Self;

    #[inline(always)]
    fn into_list(self) -> Self {
        self
    }
}

macro_rules! list_type {
    () => { Nil };
    ($head:ident $(, $rest:ident)*) => { Cons<$head, list_type!($($rest),*)> };
}

macro_rules! list_value {
    () => { Nil };
    ($head:ident $(, $rest:ident)*) => { Cons { head: $head, tail: list_value!($($rest),*) } };
}

macro_rules! impl_into_list {
    ($($name:ident),+) => {
        impl<$($name),+> IntoList for ($($name,)+) {
            type List = list_type!($($name),+);

            #[inline(always)]
            #[allow(non_snake_case)]
            fn into_list(self) -> Self::List {
                let ($($name,)+) = self;
                list_value!($($name),+)
            }
        }
    };
}

impl_into_list!(A);
impl_into_list!(A, B);
impl_into_list!(A, B, C);
impl_into_list!(A, B, C, D);
impl_into_list!(A, B, C, D, E);
impl_into_list!(A, B, C, D, E, F);
impl_into_list!(A, B, C, D, E, F, G);
impl_into_list!(A, B, C, D, E, F, G, H);
impl_into_list!(A, B, C, D, E, F, G, H, I);
impl_into_list!(A, B, C, D, E, F, G, H, I, J);
impl_into_list!(A, B, C, D, E, F, G, H, I, J, K);
impl_into_list!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuples_keep_argument_order() {
        let list = (1i32, 'a', 2u8).into_list();
        assert_eq!(list, Cons::new(1i32, Cons::new('a', Cons::new(2u8, Nil))));
        assert_eq!(().into_list(), Nil);
    }
}
