//! Tag-name rendering and assembly events.
//!
//! With the `tracing` feature, every container assembly emits a `TRACE` event
//! on target `shared_resources` naming the effective set. Without it the
//! hook compiles to nothing.

use core::fmt;
use core::marker::PhantomData;

use crate::set::TypeList;

/// `Display` adapter printing the tag names of `L` as `{A, B, C}`.
///
/// ```
/// use shared_resources::{trace::TagNames, type_set};
///
/// assert_eq!(TagNames::<type_set![i32, char]>::new().to_string(), "{i32, char}");
/// ```
pub struct TagNames<L>(PhantomData<fn() -> L>);

impl<L> TagNames<L> {
    pub const fn new() -> Self {
        TagNames(PhantomData)
    }
}

impl<L> Default for TagNames<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: TypeList> fmt::Display for TagNames<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut result = Ok(());
        let mut first = true;
        L::for_each_tag(|name| {
            if result.is_ok() {
                result = if first { f.write_str(name) } else { write!(f, ", {name}") };
            }
            first = false;
        });
        result?;
        f.write_str("}")
    }
}

impl<L: TypeList> fmt::Debug for TagNames<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[inline(always)]
pub(crate) fn assembled<L: TypeList>(container: &'static str, via: &'static str) {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "shared_resources",
        container,
        via,
        len = L::LEN,
        tags = %TagNames::<L>::new(),
        "container assembled"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (container, via);
}
