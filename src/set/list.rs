use core::any::type_name;

/// The empty type set, and the empty bindings value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nil;

/// A type set with `H` in front of `T`, and a value of `H` in front of the
/// values of `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cons<H, T> {
    pub head: H,
    pub tail: T,
}

impl<H, T> Cons<H, T> {
    #[inline(always)]
    pub const fn new(head: H, tail: T) -> Self {
        Cons { head, tail }
    }
}

/// Finite list of types.
pub trait TypeList {
    /// Number of types.
    const LEN: usize;

    /// Visit `type_name` of each type, front to back.
    fn for_each_tag<F: FnMut(&'static str)>(f: F);
}

impl TypeList for Nil {
    const LEN: usize = 0;

    #[inline(always)]
    fn for_each_tag<F: FnMut(&'static str)>(_f: F) {}
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = T::LEN + 1;

    fn for_each_tag<F: FnMut(&'static str)>(mut f: F) {
        f(type_name::<H>());
        T::for_each_tag(f);
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn length_and_names() {
        type Three = Cons<i32, Cons<char, Cons<u8, Nil>>>;
        assert_eq!(<Three as TypeList>::LEN, 3);
        assert_eq!(<Nil as TypeList>::LEN, 0);

        let mut names = Vec::new();
        Three::for_each_tag(|name| names.push(name));
        assert_eq!(names, ["i32", "char", "u8"]);
    }
}
