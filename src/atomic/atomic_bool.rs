/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Boolean
//!
//! Provides an atomic boolean wrapper backed by a 32-bit integer slot.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

use crate::atomic::no_copy::NoCopy;
use crate::atomic::traits::Atomic;

const FALSE: u32 = 0;
const TRUE: u32 = 1;

#[inline]
const fn encode(value: bool) -> u32 {
    if value {
        TRUE
    } else {
        FALSE
    }
}

#[inline]
const fn decode(bits: u32) -> bool {
    bits != FALSE
}

/// Atomic boolean value.
///
/// The flag is encoded as `0` for `false` and `1` for `true` in an
/// `AtomicU32`. Any nonzero slot content reads back as `true`, so a slot
/// written through `inner()` with another nonzero value still decodes
/// correctly; `compare_and_swap` however compares the encoded bits and only
/// matches the canonical `1`.
///
/// Arithmetic is not offered.
///
/// # Example
///
/// ```rust
/// use prism3_atom::AtomicBool;
/// use std::sync::Arc;
/// use std::thread;
///
/// let done = Arc::new(AtomicBool::default());
/// let worker = {
///     let done = done.clone();
///     thread::spawn(move || done.set(true))
/// };
/// worker.join().unwrap();
/// assert!(done.value());
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicBool {
    _nocopy: NoCopy,
    inner: AtomicU32,
}

impl AtomicBool {
    /// Creates a new atomic boolean.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub const fn new(value: bool) -> Self {
        Self {
            _nocopy: NoCopy::new(),
            inner: AtomicU32::new(encode(value)),
        }
    }

    /// Atomically reads the current value.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn value(&self) -> bool {
        decode(self.inner.load(Ordering::SeqCst))
    }

    /// Atomically overwrites the current value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    #[inline]
    pub fn set(&self, value: bool) {
        self.inner.store(encode(value), Ordering::SeqCst);
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
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atom::AtomicBool;
    ///
    /// let flag = AtomicBool::new(false);
    /// assert!(!flag.swap(true));
    /// assert!(flag.swap(false));
    /// ```
    #[inline]
    pub fn swap(&self, new: bool) -> bool {
        decode(self.inner.swap(encode(new), Ordering::SeqCst))
    }

    /// Stores `new` only if the current value equals `old`.
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
    pub fn compare_and_swap(&self, old: bool, new: bool) -> bool {
        self.compare_set(old, new).is_ok()
    }

    /// Stores `new` only if the current value equals `current`, reporting
    /// the observed value on mismatch.
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
    pub fn compare_set(&self, current: bool, new: bool) -> Result<(), bool> {
        self.inner
            .compare_exchange(
                encode(current),
                encode(new),
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .map(|_| ())
            .map_err(decode)
    }

    /// Gets a reference to the underlying `AtomicU32` slot.
    ///
    /// # Returns
    ///
    /// A reference to the underlying `std::sync::atomic::AtomicU32`.
    #[inline]
    pub fn inner(&self) -> &AtomicU32 {
        &self.inner
    }
}

impl Atomic for AtomicBool {
    type Value = bool;

    #[inline]
    fn value(&self) -> bool {
        self.value()
    }

    #[inline]
    fn set(&self, value: bool) {
        self.set(value);
    }

    #[inline]
    fn swap(&self, new: bool) -> bool {
        self.swap(new)
    }

    #[inline]
    fn compare_and_swap(&self, old: bool, new: bool) -> bool {
        self.compare_and_swap(old, new)
    }

    #[inline]
    fn compare_set(&self, current: bool, new: bool) -> Result<(), bool> {
        self.compare_set(current, new)
    }
}

impl Default for AtomicBool {
    #[inline]
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<bool> for AtomicBool {
    #[inline]
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicBool")
            .field("value", &self.value())
            .finish()
    }
}

impl fmt::Display for AtomicBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
