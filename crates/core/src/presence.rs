use std::{
    borrow::Cow,
    cell::{Cell, RefCell},
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    error::Error as StdError,
    ffi::{OsStr, OsString},
    fmt,
    marker::PhantomData,
    num::{
        NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
        NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize, ParseFloatError,
        ParseIntError, TryFromIntError,
    },
    ops::{Range, RangeInclusive},
    path::{Path, PathBuf},
    ptr::NonNull,
    rc::Rc,
    str::{ParseBoolError, Utf8Error},
    string::FromUtf8Error,
    sync::{Arc, Mutex, RwLock, mpsc},
    time::{Duration, Instant, SystemTime},
};

/// A type that knows whether a value of itself represents absence.
///
/// This is the capability [`Outcome`] requires of its payloads, replacing a
/// runtime check of "is this a null pointer, an empty handle, or a wrapper
/// around one".
/// A value is absent when it is a nullable representation holding its null
/// state, or when it is a wrapper whose wrapped value is absent.
///
/// The default method reports "never absent", which is the right answer for
/// plain values such as numbers, strings, collections, and most user structs.
/// Opt a type in with an empty impl, or with `#[derive(Presence)]` when the
/// `macros` feature is enabled.
///
/// # Provided implementations
///
/// - [`Option<T>`]: absent when `None`, or when `Some` holds an absent value.
/// - `*const T` and `*mut T`: absent when null.
/// - `&T`, `&mut T`, [`Box<T>`], [`Rc<T>`], [`Arc<T>`], [`Cow<B>`]: absent
///   when the pointee is absent.
/// - [`RefCell<T>`], [`Mutex<T>`], [`RwLock<T>`]: absent when the contents are
///   absent. A cell or lock that is currently held elsewhere (or poisoned)
///   cannot be inspected without blocking and counts as present.
/// - [`Cell<T>`]: never absent, since its contents cannot be inspected without
///   copying or replacing them.
/// - Primitives, `NonZero*` integers, `str`, [`String`], tuples (up to twelve
///   elements), [`Result`], ranges, std collections, [`NonNull<T>`],
///   [`PhantomData<T>`], time types, channel endpoints, function pointers
///   (including ones taking references), and common std error types: never
///   absent.
/// - [`Outcome<T, E>`](crate::Outcome): never absent.
///
/// # Examples
///
/// ```
/// use invariant_core::Presence;
///
/// #[derive(Debug)]
/// struct Celsius(f64);
///
/// impl Presence for Celsius {}
///
/// assert!(!Celsius(21.5).is_absent());
/// assert!(None::<Celsius>.is_absent());
/// assert!(Box::new(None::<Celsius>).is_absent());
/// assert!(std::ptr::null::<Celsius>().is_absent());
/// ```
///
/// [`Outcome`]: crate::Outcome
pub trait Presence {
    /// Returns `true` if this value represents absence.
    fn is_absent(&self) -> bool {
        false
    }
}

macro_rules! never_absent {
    ($($ty:ty),* $(,)?) => {
        $(impl Presence for $ty {})*
    };
}

never_absent!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
    OsStr,
    OsString,
    Path,
    PathBuf,
    Duration,
    Instant,
    SystemTime,
    Ordering,
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);

// Error types commonly used as failure payloads.
never_absent!(
    fmt::Error,
    std::io::Error,
    ParseIntError,
    ParseFloatError,
    ParseBoolError,
    TryFromIntError,
    Utf8Error,
    FromUtf8Error,
    dyn StdError,
    dyn StdError + Send,
    dyn StdError + Send + Sync,
);

impl<T> Presence for [T] {}
impl<T, const N: usize> Presence for [T; N] {}
impl<T> Presence for Vec<T> {}
impl<T> Presence for VecDeque<T> {}
impl<T, S> Presence for HashSet<T, S> {}
impl<T> Presence for BTreeSet<T> {}
impl<K, V, S> Presence for HashMap<K, V, S> {}
impl<K, V> Presence for BTreeMap<K, V> {}
impl<T, E> Presence for Result<T, E> {}
impl<T> Presence for Range<T> {}
impl<T> Presence for RangeInclusive<T> {}
impl<T: ?Sized> Presence for Cell<T> {}
impl<T: ?Sized> Presence for PhantomData<T> {}
impl<T: ?Sized> Presence for NonNull<T> {}
impl<T> Presence for mpsc::Sender<T> {}
impl<T> Presence for mpsc::SyncSender<T> {}
impl<T> Presence for mpsc::Receiver<T> {}

macro_rules! tuples_never_absent {
    ($($name:ident)+) => {
        impl<$($name),+> Presence for ($($name,)+) {}
    };
}

tuples_never_absent!(A);
tuples_never_absent!(A B);
tuples_never_absent!(A B C);
tuples_never_absent!(A B C D);
tuples_never_absent!(A B C D E);
tuples_never_absent!(A B C D E F);
tuples_never_absent!(A B C D E F G);
tuples_never_absent!(A B C D E F G H);
tuples_never_absent!(A B C D E F G H I);
tuples_never_absent!(A B C D E F G H I J);
tuples_never_absent!(A B C D E F G H I J K);
tuples_never_absent!(A B C D E F G H I J K L);

// Pointers taking references are higher-ranked (`for<'a> fn(&'a A)`), so they
// need impls of their own next to the by-value forms.
macro_rules! fn_pointers_never_absent {
    ($(<$($param:ident),*> $ty:ty;)*) => {
        $(
            #[allow(coherence_leak_check)]
            impl<$($param: ?Sized),*, R> Presence for $ty {}
        )*
    };
}

impl<R> Presence for fn() -> R {}
impl<A, R> Presence for fn(A) -> R {}
impl<A, B, R> Presence for fn(A, B) -> R {}
impl<A, B, C, R> Presence for fn(A, B, C) -> R {}

fn_pointers_never_absent!(
    <A> fn(&A) -> R;
    <A> fn(&mut A) -> R;
    <A> fn(&A) -> &R;
    <A, B> fn(&A, &B) -> R;
    <A, B> fn(&mut A, &B) -> R;
);

macro_rules! fn_pointers_with_owned_tail {
    ($(<$($param:ident),*; $owned:ident> $ty:ty;)*) => {
        $(
            #[allow(coherence_leak_check)]
            impl<$($param: ?Sized,)* $owned, R> Presence for $ty {}
        )*
    };
}

fn_pointers_with_owned_tail!(
    <A; B> fn(&A, B) -> R;
    <A; B> fn(&mut A, B) -> R;
);

impl<T: Presence> Presence for Option<T> {
    fn is_absent(&self) -> bool {
        self.as_ref().is_none_or(|inner| inner.is_absent())
    }
}

impl<T: ?Sized> Presence for *const T {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Presence for *mut T {
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

macro_rules! delegate_to_pointee {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: ?Sized + Presence> Presence for $wrapper<T> {
                fn is_absent(&self) -> bool {
                    (**self).is_absent()
                }
            }
        )*
    };
}

delegate_to_pointee!(Box, Rc, Arc);

impl<B: ?Sized + ToOwned + Presence> Presence for Cow<'_, B> {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: ?Sized + Presence> Presence for RefCell<T> {
    fn is_absent(&self) -> bool {
        self.try_borrow().is_ok_and(|value| value.is_absent())
    }
}

impl<T: ?Sized + Presence> Presence for Mutex<T> {
    fn is_absent(&self) -> bool {
        self.try_lock().is_ok_and(|value| value.is_absent())
    }
}

impl<T: ?Sized + Presence> Presence for RwLock<T> {
    fn is_absent(&self) -> bool {
        self.try_read().is_ok_and(|value| value.is_absent())
    }
}

impl<T: ?Sized + Presence> Presence for &T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

impl<T: ?Sized + Presence> Presence for &mut T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::ptr;

    #[test]
    fn plain_values_are_never_absent() {
        assert!(!0_i32.is_absent());
        assert!(!f64::NAN.is_absent());
        assert!(!"".is_absent());
        assert!(!String::new().is_absent());
        assert!(!Vec::<i32>::new().is_absent(), "An empty vec is not absent");
        assert!(!HashMap::<u8, u8>::new().is_absent());
        assert!(!Duration::ZERO.is_absent());
    }

    #[test]
    fn option_is_absent_when_none() {
        assert!(None::<i32>.is_absent());
        assert!(!Some(0_i32).is_absent());
    }

    #[test]
    fn nested_none_is_hidden_absence() {
        assert!(Some(None::<i32>).is_absent());
        assert!(Some(Box::new(None::<i32>)).is_absent());
        assert!(!Some(Some(3_i32)).is_absent());
    }

    #[test]
    fn raw_pointers_are_absent_when_null() {
        let value = 7_u32;

        assert!(ptr::null::<u32>().is_absent());
        assert!(ptr::null_mut::<u32>().is_absent());
        assert!(!ptr::from_ref(&value).is_absent());
        assert!(!NonNull::from(&value).is_absent());
    }

    #[test]
    fn smart_pointers_delegate_to_pointee() {
        assert!(Box::new(None::<String>).is_absent());
        assert!(Rc::new(None::<String>).is_absent());
        assert!(Arc::new(None::<String>).is_absent());
        assert!(!Arc::new(Some("ok".to_string())).is_absent());

        let inner = &None::<u8>;
        assert!(inner.is_absent());
    }

    #[test]
    fn boxed_trait_object_errors_are_present() {
        let error: Box<dyn StdError + Send + Sync> = "boom".into();
        assert!(!error.is_absent());

        let error: Box<dyn StdError> = Box::new(fmt::Error);
        assert!(!error.is_absent());
    }

    #[test]
    fn function_pointers_are_present() {
        fn double(x: i32) -> i32 {
            x * 2
        }

        let f: fn(i32) -> i32 = double;
        assert!(!f.is_absent());
        assert!(None::<fn(i32) -> i32>.is_absent());
    }

    #[test]
    fn function_pointers_taking_references_are_present() {
        fn len(s: &str) -> usize {
            s.len()
        }

        fn first(items: &[u8]) -> &u8 {
            &items[0]
        }

        fn push(items: &mut Vec<u8>, item: u8) {
            items.push(item);
        }

        let len: fn(&str) -> usize = len;
        let first: fn(&[u8]) -> &u8 = first;
        let push: fn(&mut Vec<u8>, u8) = push;

        assert!(!len.is_absent());
        assert!(!first.is_absent());
        assert!(!push.is_absent());
        assert!(None::<fn(&str) -> usize>.is_absent());
    }

    #[test]
    fn tuples_are_values() {
        assert!(!(1_i32,).is_absent());
        assert!(!(1_i32, "two").is_absent());
        assert!(
            !(None::<u8>, 2_u8).is_absent(),
            "A tuple is a value even when an element is None"
        );

        let twelve = (0_u8, 1_u8, 2_u8, 3_u8, 4_u8, 5_u8, 6_u8, 7_u8, 8_u8, 9_u8, 10_u8, 11_u8);
        assert!(!twelve.is_absent());
    }

    #[test]
    fn value_like_std_types_are_present() {
        let ok: Result<u8, String> = Ok(1);
        let err: Result<u8, String> = Err("bad".into());

        assert!(!ok.is_absent());
        assert!(!err.is_absent());
        assert!(!(0_u32..4).is_absent());
        assert!(!(0_u32..=4).is_absent());
        assert!(!PhantomData::<String>.is_absent());
        assert!(!Cell::new(None::<u8>).is_absent());
        assert!(!Instant::now().is_absent());
        assert!(!SystemTime::UNIX_EPOCH.is_absent());
        assert!(!Ordering::Less.is_absent());
        assert!(!NonZeroU32::MIN.is_absent());
    }

    #[test]
    fn cow_delegates_to_borrowed_value() {
        let borrowed: Cow<'static, str> = Cow::Borrowed("text");
        let owned: Cow<'static, str> = Cow::Owned(String::from("text"));
        let missing: Cow<'static, Option<u8>> = Cow::Owned(None);

        assert!(!borrowed.is_absent());
        assert!(!owned.is_absent());
        assert!(missing.is_absent());
    }

    #[test]
    fn cells_and_locks_delegate_to_contents() {
        assert!(RefCell::new(None::<u8>).is_absent());
        assert!(!RefCell::new(Some(1_u8)).is_absent());
        assert!(Mutex::new(None::<u8>).is_absent());
        assert!(!Mutex::new(Some(1_u8)).is_absent());
        assert!(RwLock::new(None::<u8>).is_absent());
    }

    #[test]
    fn held_cells_and_locks_count_as_present() {
        let cell = RefCell::new(None::<u8>);
        let _writer = cell.borrow_mut();
        assert!(!cell.is_absent());

        let lock = Mutex::new(None::<u8>);
        let _guard = lock.lock().unwrap();
        assert!(!lock.is_absent());
    }
}
