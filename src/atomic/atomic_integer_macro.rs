/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integer Macro
//!
//! Provides a macro to generate atomic integer types with consistent
//! implementations.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate atomic integer types.
///
/// This macro generates a complete atomic integer type with all methods,
/// trait implementations, and documentation.
///
/// # Parameters
///
/// * `$name` - The name of the atomic type (e.g., `AtomicI32`)
/// * `$inner_type` - The underlying std atomic type (e.g.,
///   `std::sync::atomic::AtomicI32`)
/// * `$value_type` - The value type (e.g., `i32`)
/// * `$doc_type` - The type description for documentation (e.g., "32-bit
///   signed integer")
macro_rules! impl_atomic_integer {
    ($name:ident, $inner_type:ty, $value_type:ty, $doc_type:expr) => {
        #[doc = concat!("Atomic ", $doc_type, ".")]
        ///
        /// The value slot is only reachable through atomic operations, all
        /// of which use `SeqCst` ordering. A freshly defaulted instance
        /// holds `0`.
        ///
        /// # Overflow
        ///
        /// `add` and `sub` wrap around on overflow using two's-complement
        /// arithmetic, exactly like the `wrapping_*` integer methods. This
        /// is part of the contract, not an accident of the implementation.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_atom::", stringify!($name), ";")]
        /// use std::sync::Arc;
        /// use std::thread;
        ///
        #[doc = concat!("let counter = Arc::new(", stringify!($name), "::default());")]
        /// let mut handles = vec![];
        ///
        /// for _ in 0..10 {
        ///     let counter = counter.clone();
        ///     let handle = thread::spawn(move || {
        ///         for _ in 0..10 {
        ///             counter.add(1);
        ///         }
        ///     });
        ///     handles.push(handle);
        /// }
        ///
        /// for handle in handles {
        ///     handle.join().unwrap();
        /// }
        ///
        /// assert_eq!(counter.value(), 100);
        /// ```
        ///
        /// # Author
        ///
        /// Haixing Hu
        #[repr(transparent)]
        pub struct $name {
            _nocopy: crate::atomic::no_copy::NoCopy,
            inner: $inner_type,
        }

        impl $name {
            /// Creates a new atomic integer.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            #[inline]
            pub const fn new(value: $value_type) -> Self {
                Self {
                    _nocopy: crate::atomic::no_copy::NoCopy::new(),
                    inner: <$inner_type>::new(value),
                }
            }

            /// Atomically reads the current value.
            ///
            /// # Returns
            ///
            /// The current value.
            #[inline]
            pub fn value(&self) -> $value_type {
                self.inner.load(Ordering::SeqCst)
            }

            /// Atomically overwrites the current value.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value.
            #[inline]
            pub fn set(&self, value: $value_type) {
                self.inner.store(value, Ordering::SeqCst);
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
            #[doc = concat!("use prism3_atom::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// assert_eq!(atomic.swap(20), 10);
            /// assert_eq!(atomic.value(), 20);
            /// ```
            #[inline]
            pub fn swap(&self, new: $value_type) -> $value_type {
                self.inner.swap(new, Ordering::SeqCst)
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
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atom::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// assert!(!atomic.compare_and_swap(5, 20));
            /// assert!(atomic.compare_and_swap(10, 20));
            /// assert_eq!(atomic.value(), 20);
            /// ```
            #[inline]
            pub fn compare_and_swap(&self, old: $value_type, new: $value_type) -> bool {
                self.compare_set(old, new).is_ok()
            }

            /// Stores `new` only if the current value equals `current`,
            /// reporting the observed value on mismatch.
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
            pub fn compare_set(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> Result<(), $value_type> {
                self.inner
                    .compare_exchange(current, new, Ordering::SeqCst, Ordering::SeqCst)
                    .map(|_| ())
            }

            /// Atomically adds `delta`, returning the new value.
            ///
            /// Wraps around on overflow.
            ///
            /// # Parameters
            ///
            /// * `delta` - The value to add.
            ///
            /// # Returns
            ///
            /// The value after the addition.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_atom::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(", stringify!($value_type), "::MAX);")]
            #[doc = concat!("assert_eq!(atomic.add(1), ", stringify!($value_type), "::MIN);")]
            /// ```
            #[inline]
            pub fn add(&self, delta: $value_type) -> $value_type {
                self.inner
                    .fetch_add(delta, Ordering::SeqCst)
                    .wrapping_add(delta)
            }

            /// Atomically subtracts `delta`, returning the new value.
            ///
            /// Implemented as `add` of the two's-complement negation of
            /// `delta`, so underflow wraps identically for signed and
            /// unsigned widths.
            ///
            /// # Parameters
            ///
            /// * `delta` - The value to subtract.
            ///
            /// # Returns
            ///
            /// The value after the subtraction.
            #[inline]
            pub fn sub(&self, delta: $value_type) -> $value_type {
                self.add(delta.wrapping_neg())
            }

            /// Gets a reference to the underlying standard library atomic
            /// type.
            ///
            /// Every operation on the returned reference is still atomic;
            /// it only lets callers pick a weaker memory ordering.
            ///
            /// # Returns
            ///
            #[doc = concat!("A reference to the underlying `", stringify!($inner_type), "`.")]
            #[inline]
            pub fn inner(&self) -> &$inner_type {
                &self.inner
            }
        }

        // Trait implementations forward to the inherent methods so both
        // direct calls and generic code see the same behavior.

        impl crate::atomic::traits::Atomic for $name {
            type Value = $value_type;

            #[inline]
            fn value(&self) -> $value_type {
                self.value()
            }

            #[inline]
            fn set(&self, value: $value_type) {
                self.set(value);
            }

            #[inline]
            fn swap(&self, new: $value_type) -> $value_type {
                self.swap(new)
            }

            #[inline]
            fn compare_and_swap(&self, old: $value_type, new: $value_type) -> bool {
                self.compare_and_swap(old, new)
            }

            #[inline]
            fn compare_set(
                &self,
                current: $value_type,
                new: $value_type,
            ) -> Result<(), $value_type> {
                self.compare_set(current, new)
            }
        }

        impl crate::atomic::traits::AtomicNumber for $name {
            #[inline]
            fn add(&self, delta: $value_type) -> $value_type {
                self.add(delta)
            }

            #[inline]
            fn sub(&self, delta: $value_type) -> $value_type {
                self.sub(delta)
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl From<$value_type> for $name {
            #[inline]
            fn from(value: $value_type) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("value", &self.value())
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.value())
            }
        }
    };
}

pub(crate) use impl_atomic_integer;
