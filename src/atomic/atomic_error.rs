/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Error
//!
//! Provides an atomic holder for an optional shared error value.
//!
//! # Author
//!
//! Haixing Hu

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::atomic::holder::AtomicHolder;
use crate::atomic::no_copy::NoCopy;

/// A reference-counted, thread-safe error.
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Stands in for "no error" inside the holder, which cannot store absence.
#[derive(Debug)]
struct NilError;

impl fmt::Display for NilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("nil")
    }
}

impl Error for NilError {}

#[inline]
fn wrap(value: Option<SharedError>) -> SharedError {
    value.unwrap_or_else(|| Arc::new(NilError) as SharedError)
}

#[inline]
fn unwrap(value: Option<SharedError>) -> Option<SharedError> {
    value.filter(|err| !err.is::<NilError>())
}

/// Atomic optional error.
///
/// Holds either an error or the explicit "no error" state. The underlying
/// holder refuses to store absence, so `None` is stored as a private
/// sentinel error and translated back to `None` on every read. The sentinel
/// type is not exported and can never be observed by callers.
///
/// # Example
///
/// ```rust
/// use prism3_atom::AtomicError;
/// use std::io;
///
/// let last_error = AtomicError::default();
/// assert!(last_error.value().is_none());
///
/// last_error.set_error(io::Error::new(io::ErrorKind::Other, "disk full"));
/// assert_eq!(last_error.value().unwrap().to_string(), "disk full");
///
/// last_error.clear();
/// assert!(last_error.value().is_none());
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicError {
    _nocopy: NoCopy,
    inner: AtomicHolder<SharedError>,
}

impl AtomicError {
    /// Creates a new atomic error holding `value`.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial error, or `None`.
    pub fn new(value: Option<SharedError>) -> Self {
        let atomic = Self::default();
        atomic.set(value);
        atomic
    }

    /// Atomically reads the current error.
    ///
    /// # Returns
    ///
    /// The current error, or `None` if nothing has been stored yet or the
    /// last store was `None`.
    pub fn value(&self) -> Option<SharedError> {
        unwrap(self.inner.load())
    }

    /// Atomically replaces the current error. `None` is allowed.
    ///
    /// # Parameters
    ///
    /// * `value` - The new error, or `None`.
    pub fn set(&self, value: Option<SharedError>) {
        self.inner.store(wrap(value));
    }

    /// Atomically stores `new` and returns the previous error.
    pub fn swap(&self, new: Option<SharedError>) -> Option<SharedError> {
        unwrap(self.inner.swap(wrap(new)))
    }

    /// Wraps `err` into a [`SharedError`] and stores it.
    pub fn set_error<E>(&self, err: E)
    where
        E: Error + Send + Sync + 'static,
    {
        let err: SharedError = Arc::new(err);
        self.set(Some(err));
    }

    /// Stores the "no error" state.
    pub fn clear(&self) {
        self.set(None);
    }
}

impl Default for AtomicError {
    fn default() -> Self {
        Self {
            _nocopy: NoCopy::new(),
            inner: AtomicHolder::new(),
        }
    }
}

impl fmt::Debug for AtomicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicError")
            .field("value", &self.value())
            .finish()
    }
}
