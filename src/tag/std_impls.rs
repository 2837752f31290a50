//! Resource identities for core, alloc and std types.
//!
//! Ground types go through [`impl_resource!`](crate::impl_resource).
//! Constructors are listed in tables below: each row names the stream that
//! identifies the constructor and the parameters whose identities follow it.

use core::any::Any;
use core::error::Error;
use core::fmt::{Debug, Display};

use super::{Applied, IdCons, IdNil, Named, Resource};

macro_rules! impl_applied {
    (@args) => { IdNil };
    (@args $head:ident $(, $rest:ident)*) => {
        IdCons<$head::Id, impl_applied!(@args $($rest),*)>
    };
    ($($path:literal => $($seg:ident)::+ <$($param:ident $(: ?$unsized:ident)?),+>;)+) => {
        $(
            impl<$($param: Resource $(+ ?$unsized)?),+> Resource for $($seg)::+<$($param),+> {
                type Id = Applied<crate::tag_stream!($path), impl_applied!(@args $($param),+)>;
            }
        )+
    };
}

macro_rules! impl_tuples {
    ($(($($param:ident),+))+) => {
        $(
            impl<$($param: Resource),+> Resource for ($($param,)+) {
                type Id = Applied<crate::tag_stream!("(..)"), impl_applied!(@args $($param),+)>;
            }
        )+
    };
}

macro_rules! impl_arrays {
    ($($len:literal)+) => {
        $(
            impl<T: Resource> Resource for [T; $len] {
                type Id = Applied<
                    crate::tag_stream!(concat!("[T; ", stringify!($len), "]")),
                    IdCons<T::Id, IdNil>,
                >;
            }
        )+
    };
}

macro_rules! impl_dyn {
    ($($path:literal => [$($lt:lifetime)?] { $($bound:tt)+ })+) => {
        $(
            impl<$($lt)?> Resource for dyn $($bound)+ $(+ $lt)? {
                type Id = Named<crate::tag_stream!($path)>;
            }
        )+
    };
}

macro_rules! impl_dyn_fn {
    (@one $path:literal $fn:ident [$($marker:ident)*] $($arg:ident)*) => {
        impl<'a, $($arg: Resource,)* R: Resource> Resource for dyn $fn($($arg),*) -> R $(+ $marker)* + 'a {
            type Id = Applied<crate::tag_stream!($path), impl_applied!(@args $($arg,)* R)>;
        }
    };
    ($($path:literal => $fn:ident $(+ $marker:ident)*;)+) => {
        $(
            impl_dyn_fn!(@one $path $fn [$($marker)*]);
            impl_dyn_fn!(@one $path $fn [$($marker)*] A);
            impl_dyn_fn!(@one $path $fn [$($marker)*] A B);
            impl_dyn_fn!(@one $path $fn [$($marker)*] A B C);
        )+
    };
}

// Primitives
crate::impl_resource!(
    bool, char, str, (),
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

// NonZero
crate::impl_resource!(
    core::num::NonZeroU8, core::num::NonZeroU16, core::num::NonZeroU32,
    core::num::NonZeroU64, core::num::NonZeroU128, core::num::NonZeroUsize,
    core::num::NonZeroI8, core::num::NonZeroI16, core::num::NonZeroI32,
    core::num::NonZeroI64, core::num::NonZeroI128, core::num::NonZeroIsize,
);

// Atomics
crate::impl_resource!(
    core::sync::atomic::AtomicBool,
    core::sync::atomic::AtomicI8, core::sync::atomic::AtomicI16,
    core::sync::atomic::AtomicI32, core::sync::atomic::AtomicI64,
    core::sync::atomic::AtomicIsize,
    core::sync::atomic::AtomicU8, core::sync::atomic::AtomicU16,
    core::sync::atomic::AtomicU32, core::sync::atomic::AtomicU64,
    core::sync::atomic::AtomicUsize,
);

crate::impl_resource!(
    core::time::Duration,
    core::cmp::Ordering,
    core::ops::RangeFull,
    core::marker::PhantomPinned,
    core::task::Waker,
    core::ffi::CStr,
);

impl_applied! {
    "core::option::Option" => Option<T>;
    "core::result::Result" => Result<T, E>;
    "core::cell::Cell" => core::cell::Cell<T: ?Sized>;
    "core::cell::RefCell" => core::cell::RefCell<T: ?Sized>;
    "core::cell::UnsafeCell" => core::cell::UnsafeCell<T: ?Sized>;
    "core::cell::OnceCell" => core::cell::OnceCell<T>;
    "core::mem::ManuallyDrop" => core::mem::ManuallyDrop<T: ?Sized>;
    "core::mem::MaybeUninit" => core::mem::MaybeUninit<T>;
    "core::pin::Pin" => core::pin::Pin<T>;
    "core::marker::PhantomData" => core::marker::PhantomData<T: ?Sized>;
    "core::ops::Range" => core::ops::Range<T>;
    "core::ops::RangeFrom" => core::ops::RangeFrom<T>;
    "core::ops::RangeTo" => core::ops::RangeTo<T>;
    "core::ops::RangeInclusive" => core::ops::RangeInclusive<T>;
    "core::ops::RangeToInclusive" => core::ops::RangeToInclusive<T>;
    "core::ops::Bound" => core::ops::Bound<T>;
    "core::cmp::Reverse" => core::cmp::Reverse<T>;
    "core::num::Wrapping" => core::num::Wrapping<T>;
    "core::num::Saturating" => core::num::Saturating<T>;
    "core::task::Poll" => core::task::Poll<T>;
    "core::sync::atomic::AtomicPtr" => core::sync::atomic::AtomicPtr<T>;
}

impl_tuples! {
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, F)
    (A, B, C, D, F, G)
    (A, B, C, D, F, G, H)
    (A, B, C, D, F, G, H, I)
    (A, B, C, D, F, G, H, I, J)
    (A, B, C, D, F, G, H, I, J, K)
    (A, B, C, D, F, G, H, I, J, K, M)
    (A, B, C, D, F, G, H, I, J, K, M, N)
}

impl_arrays! {
    0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
    17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
    64 128 256 512 1024 2048 4096
}

impl<T: Resource> Resource for [T] {
    type Id = Applied<crate::tag_stream!("[T]"), IdCons<T::Id, IdNil>>;
}

impl<'a, T: Resource + ?Sized> Resource for &'a T {
    type Id = Applied<crate::tag_stream!("&"), IdCons<T::Id, IdNil>>;
}

impl<'a, T: Resource + ?Sized> Resource for &'a mut T {
    type Id = Applied<crate::tag_stream!("&mut"), IdCons<T::Id, IdNil>>;
}

impl<T: Resource + ?Sized> Resource for *const T {
    type Id = Applied<crate::tag_stream!("*const"), IdCons<T::Id, IdNil>>;
}

impl<T: Resource + ?Sized> Resource for *mut T {
    type Id = Applied<crate::tag_stream!("*mut"), IdCons<T::Id, IdNil>>;
}

// Trait objects, usable behind `Box`, `Rc`, `Arc` and references.
impl_dyn! {
    "dyn Any" => [] { Any }
    "dyn Any + Send" => [] { Any + Send }
    "dyn Any + Send + Sync" => [] { Any + Send + Sync }
    "dyn Error" => ['a] { Error }
    "dyn Error + Send" => ['a] { Error + Send }
    "dyn Error + Send + Sync" => ['a] { Error + Send + Sync }
    "dyn Debug" => ['a] { Debug }
    "dyn Debug + Send + Sync" => ['a] { Debug + Send + Sync }
    "dyn Display" => ['a] { Display }
    "dyn Display + Send + Sync" => ['a] { Display + Send + Sync }
}

impl_dyn_fn! {
    "dyn Fn" => Fn;
    "dyn Fn + Send" => Fn + Send;
    "dyn Fn + Send + Sync" => Fn + Send + Sync;
    "dyn FnMut" => FnMut;
    "dyn FnMut + Send" => FnMut + Send;
    "dyn FnMut + Send + Sync" => FnMut + Send + Sync;
    "dyn FnOnce" => FnOnce;
    "dyn FnOnce + Send" => FnOnce + Send;
    "dyn FnOnce + Send + Sync" => FnOnce + Send + Sync;
}

#[cfg(feature = "alloc")]
crate::impl_resource!(alloc::string::String, alloc::ffi::CString);

#[cfg(feature = "alloc")]
impl_applied! {
    "alloc::boxed::Box" => alloc::boxed::Box<T: ?Sized>;
    "alloc::rc::Rc" => alloc::rc::Rc<T: ?Sized>;
    "alloc::rc::Weak" => alloc::rc::Weak<T: ?Sized>;
    "alloc::sync::Arc" => alloc::sync::Arc<T: ?Sized>;
    "alloc::sync::Weak" => alloc::sync::Weak<T: ?Sized>;
    "alloc::vec::Vec" => alloc::vec::Vec<T>;
    "alloc::collections::VecDeque" => alloc::collections::VecDeque<T>;
    "alloc::collections::LinkedList" => alloc::collections::LinkedList<T>;
    "alloc::collections::BinaryHeap" => alloc::collections::BinaryHeap<T>;
    "alloc::collections::BTreeSet" => alloc::collections::BTreeSet<T>;
    "alloc::collections::BTreeMap" => alloc::collections::BTreeMap<K, V>;
}

#[cfg(feature = "alloc")]
impl<'a, B> Resource for alloc::borrow::Cow<'a, B>
where
    B: Resource + alloc::borrow::ToOwned + ?Sized,
{
    type Id = Applied<crate::tag_stream!("alloc::borrow::Cow"), IdCons<B::Id, IdNil>>;
}

#[cfg(feature = "std")]
crate::impl_resource!(
    std::sync::Condvar, std::sync::Barrier, std::sync::Once,
    std::thread::Thread,
    std::fs::File, std::fs::Metadata, std::fs::FileType, std::fs::DirEntry,
    std::fs::Permissions, std::fs::OpenOptions, std::fs::ReadDir,
    std::path::Path, std::path::PathBuf,
    std::net::IpAddr, std::net::Ipv4Addr, std::net::Ipv6Addr,
    std::net::SocketAddr, std::net::SocketAddrV4, std::net::SocketAddrV6,
    std::net::TcpStream, std::net::TcpListener, std::net::UdpSocket,
    std::process::Command, std::process::Child, std::process::Stdio,
    std::process::ExitStatus, std::process::Output,
    std::time::Instant, std::time::SystemTime,
    std::io::Error, std::io::ErrorKind,
    std::ffi::OsStr, std::ffi::OsString,
);

#[cfg(feature = "std")]
impl_applied! {
    "std::sync::Mutex" => std::sync::Mutex<T: ?Sized>;
    "std::sync::RwLock" => std::sync::RwLock<T: ?Sized>;
    "std::sync::OnceLock" => std::sync::OnceLock<T>;
    "std::sync::mpsc::Sender" => std::sync::mpsc::Sender<T>;
    "std::sync::mpsc::SyncSender" => std::sync::mpsc::SyncSender<T>;
    "std::sync::mpsc::Receiver" => std::sync::mpsc::Receiver<T>;
    "std::thread::JoinHandle" => std::thread::JoinHandle<T>;
    "std::io::Cursor" => std::io::Cursor<T>;
    "std::collections::HashSet" => std::collections::HashSet<T>;
    "std::collections::HashMap" => std::collections::HashMap<K, V>;
}
