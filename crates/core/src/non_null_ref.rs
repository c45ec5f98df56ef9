use std::{
    cell::{RefCell, RefMut},
    ptr,
};

use crate::{
    Presence,
    violation::{Violation, violated},
};

/// A non-owning reference guaranteed to be present.
///
/// `NonNullRef` attests, once and at construction, that a handle to
/// caller-owned storage exists.
/// Code that receives a `NonNullRef` can read and mutate the storage without
/// re-checking for absence.
///
/// The storage is a [`RefCell<T>`] so several wrappers (and the owner) can
/// share it and observe each other's writes.
/// The wrapper never owns or copies the storage; the borrow checker ties it to
/// the storage's lifetime `'a`.
/// Because `RefCell` is not `Sync`, a `NonNullRef` cannot be shared across
/// threads, and overlapping mutable borrows panic under the usual `RefCell`
/// rules.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
///
/// use invariant_core::NonNullRef;
///
/// let storage = RefCell::new(String::from("draft"));
/// let handle = NonNullRef::new(Some(&storage));
///
/// handle.borrow_mut().push_str(" v2");
///
/// assert_eq!(handle.value(), "draft v2");
/// assert_eq!(*storage.borrow(), "draft v2");
/// ```
#[derive(Debug)]
pub struct NonNullRef<'a, T> {
    target: &'a RefCell<T>,
}

impl<'a, T> NonNullRef<'a, T> {
    /// Wraps `target`, asserting that it is present.
    ///
    /// Prefer the `From<&RefCell<T>>` conversion when you already hold a
    /// plain reference.
    ///
    /// # Panics
    ///
    /// Panics if `target` is `None`.
    #[track_caller]
    pub fn new(target: Option<&'a RefCell<T>>) -> Self {
        match target {
            Some(target) => Self { target },
            None => violated(Violation::AbsentReference),
        }
    }

    /// Returns the live handle to the underlying storage.
    ///
    /// Writes through it are visible to every other holder of the same storage.
    #[must_use]
    pub fn reference(&self) -> &'a RefCell<T> {
        self.target
    }

    /// Mutably borrows the underlying storage.
    ///
    /// # Panics
    ///
    /// Panics if the storage is currently borrowed.
    #[track_caller]
    pub fn borrow_mut(&self) -> RefMut<'a, T> {
        self.target.borrow_mut()
    }

    /// Returns `true` if both wrappers point at the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ptr::eq(self.target, other.target)
    }
}

impl<T: Clone> NonNullRef<'_, T> {
    /// Returns a copy of the value currently held in the storage.
    ///
    /// # Panics
    ///
    /// Panics if the storage is currently mutably borrowed.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> T {
        self.target.borrow().clone()
    }
}

impl<T> Clone for NonNullRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NonNullRef<'_, T> {}

/// A Rust reference is never null, so this conversion always succeeds.
impl<'a, T> From<&'a RefCell<T>> for NonNullRef<'a, T> {
    fn from(target: &'a RefCell<T>) -> Self {
        Self { target }
    }
}

impl<T> Presence for NonNullRef<'_, T> {}
