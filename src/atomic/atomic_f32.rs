/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Floating Point
//!
//! Provides an atomic 32-bit floating point wrapper. Implemented using bit
//! conversion with `AtomicU32`.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

use crate::atomic::no_copy::NoCopy;
use crate::atomic::traits::Atomic;
use crate::atomic::traits::AtomicNumber;

/// Atomic 32-bit floating point number.
///
/// Stored as raw bits in an `AtomicU32`; see [`AtomicF64`](crate::AtomicF64)
/// for the bitwise comparison rules and the livelock caveat of `add`,
/// which apply here unchanged.
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicF32 {
    _nocopy: NoCopy,
    inner: AtomicU32,
}

impl AtomicF32 {
    /// Creates a new atomic floating point number.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub fn new(value: f32) -> Self {
        Self {
            _nocopy: NoCopy::new(),
            inner: AtomicU32::new(value.to_bits()),
        }
    }

    /// Atomically reads the current value.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn value(&self) -> f32 {
        f32::from_bits(self.inner.load(Ordering::SeqCst))
    }

    /// Atomically overwrites the current value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    #[inline]
    pub fn set(&self, value: f32) {
        self.inner.store(value.to_bits(), Ordering::SeqCst);
    }

    /// Atomically stores `new` and returns the previous value.
    ///
    /// # Parameters
    ///
    /// * `new` - The new value to swap in.
    ///
    /// # Returns
    ///
    /// The value present immediately before the swap.
    #[inline]
    pub fn swap(&self, new: f32) -> f32 {
        f32::from_bits(self.inner.swap(new.to_bits(), Ordering::SeqCst))
    }

    /// Stores `new` only if the current bit pattern equals that of `old`.
    ///
    /// # Parameters
    ///
    /// * `old` - The expected current value.
    /// * `new` - The value to store if `old` matches.
    ///
    /// # Returns
    ///
    /// `true` if the value was replaced.
    #[inline]
    pub fn compare_and_swap(&self, old: f32, new: f32) -> bool {
        self.compare_set(old, new).is_ok()
    }

    /// Bitwise compare-and-set reporting the observed value on mismatch.
    ///
    /// # Parameters
    ///
    /// * `current` - The expected current value.
    /// * `new` - The value to store if `current` matches.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` on mismatch.
    #[inline]
    pub fn compare_set(&self, current: f32, new: f32) -> Result<(), f32> {
        self.inner
            .compare_exchange(
                current.to_bits(),
                new.to_bits(),
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .map(|_| ())
            .map_err(f32::from_bits)
    }

    /// Adds `delta` through a CAS retry loop, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The value after the addition.
    #[inline]
    pub fn add(&self, delta: f32) -> f32 {
        let mut current = self.inner.load(Ordering::SeqCst);
        loop {
            let new = (f32::from_bits(current) + delta).to_bits();
            match self.inner.compare_exchange_weak(
                current,
                new,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return f32::from_bits(new),
                Err(actual) => current = actual,
            }
        }
    }

    /// Subtracts `delta`, returning the new value.
    ///
    /// Same as `add(-delta)`.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to subtract.
    ///
    /// # Returns
    ///
    /// The value after the subtraction.
    #[inline]
    pub fn sub(&self, delta: f32) -> f32 {
        self.add(-delta)
    }

    /// Gets a reference to the underlying `AtomicU32` slot.
    ///
    /// Use `f32::to_bits()` and `f32::from_bits()` when going through it.
    ///
    /// # Returns
    ///
    /// A reference to the underlying `std::sync::atomic::AtomicU32`.
    #[inline]
    pub fn inner(&self) -> &AtomicU32 {
        &self.inner
    }
}

impl Atomic for AtomicF32 {
    type Value = f32;

    #[inline]
    fn value(&self) -> f32 {
        self.value()
    }

    #[inline]
    fn set(&self, value: f32) {
        self.set(value);
    }

    #[inline]
    fn swap(&self, new: f32) -> f32 {
        self.swap(new)
    }

    #[inline]
    fn compare_and_swap(&self, old: f32, new: f32) -> bool {
        self.compare_and_swap(old, new)
    }

    #[inline]
    fn compare_set(&self, current: f32, new: f32) -> Result<(), f32> {
        self.compare_set(current, new)
    }
}

impl AtomicNumber for AtomicF32 {
    #[inline]
    fn add(&self, delta: f32) -> f32 {
        self.add(delta)
    }

    #[inline]
    fn sub(&self, delta: f32) -> f32 {
        self.sub(delta)
    }
}

impl Default for AtomicF32 {
    #[inline]
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f32> for AtomicF32 {
    #[inline]
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicF32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicF32")
            .field("value", &self.value())
            .finish()
    }
}

impl fmt::Display for AtomicF32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
