/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Pointer
//!
//! Provides an atomic raw-address wrapper.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::ptr;
use std::sync::atomic::AtomicPtr;
use std::sync::atomic::Ordering;

use crate::atomic::no_copy::NoCopy;
use crate::atomic::traits::Atomic;

/// Atomic raw pointer.
///
/// Treats the address as an opaque handle: the wrapper never dereferences
/// it, never frees it and offers no pointer arithmetic. Ownership of
/// whatever the address points to stays with the caller. A freshly
/// defaulted instance holds a null pointer.
///
/// # Example
///
/// ```rust
/// use prism3_atom::AtomicPointer;
///
/// let mut a = 1u64;
/// let mut b = 2u64;
/// let slot = AtomicPointer::<u64>::default();
/// assert!(slot.value().is_null());
///
/// slot.set(&mut a);
/// assert!(slot.compare_and_swap(&mut a, &mut b));
/// assert_eq!(slot.value(), &mut b as *mut u64);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicPointer<T> {
    _nocopy: NoCopy,
    inner: AtomicPtr<T>,
}

impl<T> AtomicPointer<T> {
    /// Creates a new atomic pointer.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial address.
    #[inline]
    pub const fn new(value: *mut T) -> Self {
        Self {
            _nocopy: NoCopy::new(),
            inner: AtomicPtr::new(value),
        }
    }

    /// Atomically reads the current address.
    #[inline]
    pub fn value(&self) -> *mut T {
        self.inner.load(Ordering::SeqCst)
    }

    /// Atomically overwrites the current address.
    #[inline]
    pub fn set(&self, value: *mut T) {
        self.inner.store(value, Ordering::SeqCst);
    }

    /// Atomically stores `new` and returns the previous address.
    #[inline]
    pub fn swap(&self, new: *mut T) -> *mut T {
        self.inner.swap(new, Ordering::SeqCst)
    }

    /// Stores `new` only if the current address equals `old`, returning
    /// whether the address was replaced.
    #[inline]
    pub fn compare_and_swap(&self, old: *mut T, new: *mut T) -> bool {
        self.compare_set(old, new).is_ok()
    }

    /// Stores `new` only if the current address equals `current`,
    /// reporting the observed address on mismatch.
    #[inline]
    pub fn compare_set(&self, current: *mut T, new: *mut T) -> Result<(), *mut T> {
        self.inner
            .compare_exchange(current, new, Ordering::SeqCst, Ordering::SeqCst)
            .map(|_| ())
    }

    /// Gets a reference to the underlying `AtomicPtr`.
    #[inline]
    pub fn inner(&self) -> &AtomicPtr<T> {
        &self.inner
    }
}

impl<T> Atomic for AtomicPointer<T> {
    type Value = *mut T;

    #[inline]
    fn value(&self) -> *mut T {
        self.value()
    }

    #[inline]
    fn set(&self, value: *mut T) {
        self.set(value);
    }

    #[inline]
    fn swap(&self, new: *mut T) -> *mut T {
        self.swap(new)
    }

    #[inline]
    fn compare_and_swap(&self, old: *mut T, new: *mut T) -> bool {
        self.compare_and_swap(old, new)
    }

    #[inline]
    fn compare_set(&self, current: *mut T, new: *mut T) -> Result<(), *mut T> {
        self.compare_set(current, new)
    }
}

impl<T> Default for AtomicPointer<T> {
    #[inline]
    fn default() -> Self {
        Self::new(ptr::null_mut())
    }
}

impl<T> From<*mut T> for AtomicPointer<T> {
    #[inline]
    fn from(value: *mut T) -> Self {
        Self::new(value)
    }
}

impl<T> fmt::Debug for AtomicPointer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicPointer")
            .field("value", &self.value())
            .finish()
    }
}

impl<T> fmt::Pointer for AtomicPointer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.value(), f)
    }
}
