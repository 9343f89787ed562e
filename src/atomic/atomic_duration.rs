/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Duration
//!
//! Provides an atomic `std::time::Duration` wrapper stored as nanoseconds in
//! an `AtomicU64`.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;

use crate::atomic::no_copy::NoCopy;
use crate::atomic::traits::Atomic;
use crate::atomic::traits::AtomicNumber;

// Keeps the low 64 bits, matching the wraparound of `add`.
#[inline]
fn to_nanos(duration: Duration) -> u64 {
    duration.as_nanos() as u64
}

#[inline]
fn from_nanos(nanos: u64) -> Duration {
    Duration::from_nanos(nanos)
}

/// Atomic duration.
///
/// The duration lives in an `AtomicU64` as whole nanoseconds, which covers
/// roughly 584 years. Arithmetic wraps around modulo 2^64 nanoseconds with
/// no overflow or underflow checks: subtracting a larger duration from a
/// smaller one yields a very large duration rather than a panic. Durations
/// beyond the representable range are likewise reduced modulo 2^64
/// nanoseconds when stored, and sub-nanosecond precision does not exist in
/// `Duration` to begin with.
///
/// # Example
///
/// ```rust
/// use prism3_atom::AtomicDuration;
/// use std::time::Duration;
///
/// let busy = AtomicDuration::default();
/// busy.add(Duration::from_millis(250));
/// busy.add(Duration::from_millis(750));
/// assert_eq!(busy.value(), Duration::from_secs(1));
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicDuration {
    _nocopy: NoCopy,
    inner: AtomicU64,
}

impl AtomicDuration {
    /// Creates a new atomic duration.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub fn new(value: Duration) -> Self {
        Self {
            _nocopy: NoCopy::new(),
            inner: AtomicU64::new(to_nanos(value)),
        }
    }

    /// Atomically reads the current value.
    #[inline]
    pub fn value(&self) -> Duration {
        from_nanos(self.inner.load(Ordering::SeqCst))
    }

    /// Atomically overwrites the current value.
    #[inline]
    pub fn set(&self, value: Duration) {
        self.inner.store(to_nanos(value), Ordering::SeqCst);
    }

    /// Atomically stores `new` and returns the previous value.
    #[inline]
    pub fn swap(&self, new: Duration) -> Duration {
        from_nanos(self.inner.swap(to_nanos(new), Ordering::SeqCst))
    }

    /// Stores `new` only if the current value equals `old`, returning
    /// whether the value was replaced.
    ///
    /// An `old` of 2^64 nanoseconds or more can never match, since no stored
    /// value is that large.
    #[inline]
    pub fn compare_and_swap(&self, old: Duration, new: Duration) -> bool {
        self.compare_set(old, new).is_ok()
    }

    /// Stores `new` only if the current value equals `current`, reporting
    /// the observed value on mismatch.
    ///
    /// A `current` of 2^64 nanoseconds or more is a mismatch.
    #[inline]
    pub fn compare_set(&self, current: Duration, new: Duration) -> Result<(), Duration> {
        if current.as_nanos() > u128::from(u64::MAX) {
            return Err(self.value());
        }
        self.inner
            .compare_exchange(
                to_nanos(current),
                to_nanos(new),
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .map(|_| ())
            .map_err(from_nanos)
    }

    /// Atomically adds `delta`, returning the new value.
    ///
    /// Wraps around modulo 2^64 nanoseconds.
    #[inline]
    pub fn add(&self, delta: Duration) -> Duration {
        self.add_nanos(to_nanos(delta))
    }

    /// Atomically subtracts `delta`, returning the new value.
    ///
    /// Implemented as an addition of the two's-complement negation, so it
    /// wraps around exactly like `add`.
    #[inline]
    pub fn sub(&self, delta: Duration) -> Duration {
        self.add_nanos(to_nanos(delta).wrapping_neg())
    }

    #[inline]
    fn add_nanos(&self, nanos: u64) -> Duration {
        from_nanos(
            self.inner
                .fetch_add(nanos, Ordering::SeqCst)
                .wrapping_add(nanos),
        )
    }

    /// Gets a reference to the underlying nanosecond counter.
    ///
    /// # Returns
    ///
    /// A reference to the underlying `std::sync::atomic::AtomicU64`.
    #[inline]
    pub fn inner(&self) -> &AtomicU64 {
        &self.inner
    }
}

impl Atomic for AtomicDuration {
    type Value = Duration;

    #[inline]
    fn value(&self) -> Duration {
        self.value()
    }

    #[inline]
    fn set(&self, value: Duration) {
        self.set(value);
    }

    #[inline]
    fn swap(&self, new: Duration) -> Duration {
        self.swap(new)
    }

    #[inline]
    fn compare_and_swap(&self, old: Duration, new: Duration) -> bool {
        self.compare_and_swap(old, new)
    }

    #[inline]
    fn compare_set(&self, current: Duration, new: Duration) -> Result<(), Duration> {
        self.compare_set(current, new)
    }
}

impl AtomicNumber for AtomicDuration {
    #[inline]
    fn add(&self, delta: Duration) -> Duration {
        self.add(delta)
    }

    #[inline]
    fn sub(&self, delta: Duration) -> Duration {
        self.sub(delta)
    }
}

impl Default for AtomicDuration {
    #[inline]
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl From<Duration> for AtomicDuration {
    #[inline]
    fn from(value: Duration) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicDuration")
            .field("value", &self.value())
            .finish()
    }
}
