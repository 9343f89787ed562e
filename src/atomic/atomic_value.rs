/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Value
//!
//! Provides an atomic holder for values of one arbitrary type.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::holder::AtomicHolder;
use crate::atomic::no_copy::NoCopy;

/// Atomic value of a single type `T`.
///
/// Every write boxes the value and swaps the box in; every read clones the
/// current value out. Wrap large or non-`Clone` payloads in an `Arc` to keep
/// reads cheap.
///
/// All stores on one instance use the same concrete type because the type
/// parameter says so, and there is no "nil" value to store: both mistakes
/// are compile errors rather than runtime failures. For example
/// `AtomicValue::<u32>::default().set("x")` is rejected by the compiler with
/// a type mismatch. Only `value` can report absence, and only before the
/// first store.
///
/// # Example
///
/// ```rust
/// use prism3_atom::AtomicValue;
/// use std::sync::Arc;
///
/// #[derive(Debug, PartialEq)]
/// struct Config {
///     timeout_ms: u64,
/// }
///
/// let config = AtomicValue::<Arc<Config>>::default();
/// assert!(config.value().is_none());
///
/// config.set(Arc::new(Config { timeout_ms: 1000 }));
/// assert_eq!(config.value().unwrap().timeout_ms, 1000);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicValue<T>
where
    T: Clone + Send + Sync,
{
    _nocopy: NoCopy,
    inner: AtomicHolder<T>,
}

impl<T> AtomicValue<T>
where
    T: Clone + Send + Sync,
{
    /// Creates a new atomic value holding `value`.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    pub fn new(value: T) -> Self {
        let atomic = Self::default();
        atomic.set(value);
        atomic
    }

    /// Atomically reads the current value.
    ///
    /// # Returns
    ///
    /// A clone of the most recently stored value, or `None` if nothing has
    /// been stored yet.
    pub fn value(&self) -> Option<T> {
        self.inner.load()
    }

    /// Atomically replaces the current value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    pub fn set(&self, value: T) {
        self.inner.store(value);
    }

    /// Atomically stores `new` and returns the previous value, or `None`
    /// on the first store.
    pub fn swap(&self, new: T) -> Option<T> {
        self.inner.swap(new)
    }

    /// Stores `new` only if the current value compares equal to `old`.
    ///
    /// A never-set instance matches nothing.
    ///
    /// # Returns
    ///
    /// `true` if the value was replaced.
    pub fn compare_and_swap(&self, old: &T, new: T) -> bool
    where
        T: PartialEq,
    {
        self.inner.compare_and_swap(old, new)
    }
}

impl<T> Default for AtomicValue<T>
where
    T: Clone + Send + Sync,
{
    fn default() -> Self {
        Self {
            _nocopy: NoCopy::new(),
            inner: AtomicHolder::new(),
        }
    }
}

impl<T> From<T> for AtomicValue<T>
where
    T: Clone + Send + Sync,
{
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> fmt::Debug for AtomicValue<T>
where
    T: Clone + Send + Sync + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicValue")
            .field("value", &self.value())
            .finish()
    }
}
