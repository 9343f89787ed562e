/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic String
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::holder::AtomicHolder;
use crate::atomic::no_copy::NoCopy;

/// Atomic string value.
///
/// Each `set` boxes a new `String` on the heap and swaps the box in, so
/// every write allocates. Reads clone the current string out. A freshly
/// defaulted instance reads as the empty string.
///
/// # Example
///
/// ```rust
/// use prism3_atom::AtomicString;
///
/// let state = AtomicString::default();
/// assert_eq!(state.value(), "");
///
/// state.set("running");
/// assert_eq!(state.value(), "running");
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicString {
    _nocopy: NoCopy,
    inner: AtomicHolder<String>,
}

impl AtomicString {
    /// Creates a new atomic string holding `value`.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    pub fn new(value: impl Into<String>) -> Self {
        let atomic = Self::default();
        atomic.set(value);
        atomic
    }

    /// Atomically reads the current value.
    ///
    /// # Returns
    ///
    /// A copy of the current string, or an empty string if nothing has been
    /// stored yet.
    pub fn value(&self) -> String {
        self.inner.load().unwrap_or_default()
    }

    /// Atomically replaces the current value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    pub fn set(&self, value: impl Into<String>) {
        self.inner.store(value.into());
    }

    /// Atomically stores `new` and returns the previous value, or an empty
    /// string if nothing had been stored yet.
    pub fn swap(&self, new: impl Into<String>) -> String {
        self.inner.swap(new.into()).unwrap_or_default()
    }

    /// Stores `new` only if the current value equals `old`.
    ///
    /// A never-set instance compares equal to `""`, matching what `value`
    /// reports for it.
    ///
    /// # Returns
    ///
    /// `true` if the value was replaced.
    pub fn compare_and_swap(&self, old: &str, new: impl Into<String>) -> bool {
        self.inner.compare_and_swap_by(
            |value| match value {
                Some(value) => value == old,
                None => old.is_empty(),
            },
            new.into(),
        )
    }
}

impl Default for AtomicString {
    fn default() -> Self {
        Self {
            _nocopy: NoCopy::new(),
            inner: AtomicHolder::new(),
        }
    }
}

impl From<String> for AtomicString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for AtomicString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicString")
            .field("value", &self.value())
            .finish()
    }
}

impl fmt::Display for AtomicString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}
