/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Floating Point
//!
//! Provides an atomic 64-bit floating point wrapper. Implemented using bit
//! conversion with `AtomicU64`.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use crate::atomic::no_copy::NoCopy;
use crate::atomic::traits::Atomic;
use crate::atomic::traits::AtomicNumber;

/// Atomic 64-bit floating point number.
///
/// # Implementation Details
///
/// The standard library exposes no atomic floating-point types, so the value
/// is kept in an `AtomicU64` and moved in and out with `f64::to_bits()` and
/// `f64::from_bits()`. The atomic primitive only ever sees the raw bit
/// pattern, which means:
///
/// - `compare_and_swap` compares bits, not numbers. `+0.0` and `-0.0` do not
///   match each other, and a NaN matches a NaN with the identical payload.
/// - `set` followed by `value` returns the exact bits that were stored,
///   including NaN payloads and signed zero.
///
/// # Livelock
///
/// `add` and `sub` are optimistic CAS loops with no retry bound and no
/// backoff. Under sustained contention from other writers a caller can spin
/// indefinitely.
///
/// # Example
///
/// ```rust
/// use prism3_atom::AtomicF64;
///
/// let atomic = AtomicF64::new(1.5);
/// assert_eq!(atomic.add(2.0), 3.5);
/// assert_eq!(atomic.sub(2.0), 1.5);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicF64 {
    _nocopy: NoCopy,
    inner: AtomicU64,
}

impl AtomicF64 {
    /// Creates a new atomic floating point number.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub fn new(value: f64) -> Self {
        Self {
            _nocopy: NoCopy::new(),
            inner: AtomicU64::new(value.to_bits()),
        }
    }

    /// Atomically reads the current value.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn value(&self) -> f64 {
        f64::from_bits(self.inner.load(Ordering::SeqCst))
    }

    /// Atomically overwrites the current value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    #[inline]
    pub fn set(&self, value: f64) {
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
    pub fn swap(&self, new: f64) -> f64 {
        f64::from_bits(self.inner.swap(new.to_bits(), Ordering::SeqCst))
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
    pub fn compare_and_swap(&self, old: f64, new: f64) -> bool {
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
    pub fn compare_set(&self, current: f64, new: f64) -> Result<(), f64> {
        self.inner
            .compare_exchange(
                current.to_bits(),
                new.to_bits(),
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .map(|_| ())
            .map_err(f64::from_bits)
    }

    /// Adds `delta`, returning the new value.
    ///
    /// Not a single instruction: reads the current value, computes the sum
    /// and publishes it with a compare-and-swap, starting over whenever
    /// another writer got in between. See the type-level note on livelock.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The value after the addition.
    #[inline]
    pub fn add(&self, delta: f64) -> f64 {
        let mut current = self.inner.load(Ordering::SeqCst);
        loop {
            let new = (f64::from_bits(current) + delta).to_bits();
            match self.inner.compare_exchange_weak(
                current,
                new,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return f64::from_bits(new),
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
    pub fn sub(&self, delta: f64) -> f64 {
        self.add(-delta)
    }

    /// Gets a reference to the underlying `AtomicU64` slot.
    ///
    /// Use `f64::to_bits()` and `f64::from_bits()` when going through it.
    ///
    /// # Returns
    ///
    /// A reference to the underlying `std::sync::atomic::AtomicU64`.
    #[inline]
    pub fn inner(&self) -> &AtomicU64 {
        &self.inner
    }
}

impl Atomic for AtomicF64 {
    type Value = f64;

    #[inline]
    fn value(&self) -> f64 {
        self.value()
    }

    #[inline]
    fn set(&self, value: f64) {
        self.set(value);
    }

    #[inline]
    fn swap(&self, new: f64) -> f64 {
        self.swap(new)
    }

    #[inline]
    fn compare_and_swap(&self, old: f64, new: f64) -> bool {
        self.compare_and_swap(old, new)
    }

    #[inline]
    fn compare_set(&self, current: f64, new: f64) -> Result<(), f64> {
        self.compare_set(current, new)
    }
}

impl AtomicNumber for AtomicF64 {
    #[inline]
    fn add(&self, delta: f64) -> f64 {
        self.add(delta)
    }

    #[inline]
    fn sub(&self, delta: f64) -> f64 {
        self.sub(delta)
    }
}

impl Default for AtomicF64 {
    #[inline]
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f64> for AtomicF64 {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicF64")
            .field("value", &self.value())
            .finish()
    }
}

impl fmt::Display for AtomicF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
