/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines the contract shared by the scalar wrappers, so generic code can
//! work with any of them.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for the scalar atomic wrappers.
///
/// Every method is a single indivisible step using `SeqCst` ordering and
/// none of them can fail.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the atomic.
    type Value;

    /// Atomically reads the current value.
    ///
    /// # Returns
    ///
    /// The current value.
    fn value(&self) -> Self::Value;

    /// Atomically overwrites the current value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    fn set(&self, value: Self::Value);

    /// Atomically stores `new` and returns the value it replaced.
    ///
    /// # Parameters
    ///
    /// * `new` - The new value to swap in.
    ///
    /// # Returns
    ///
    /// The value present immediately before the swap.
    fn swap(&self, new: Self::Value) -> Self::Value;

    /// Stores `new` only if the current value is bitwise equal to `old`.
    ///
    /// A mismatch is a normal outcome, not an error.
    ///
    /// # Parameters
    ///
    /// * `old` - The expected current value.
    /// * `new` - The value to store if `old` matches.
    ///
    /// # Returns
    ///
    /// `true` if the value was replaced.
    fn compare_and_swap(&self, old: Self::Value, new: Self::Value) -> bool;

    /// Same as `compare_and_swap`, but reports the value actually observed
    /// on mismatch, which saves a reload in retry loops.
    ///
    /// # Parameters
    ///
    /// * `current` - The expected current value.
    /// * `new` - The value to store if `current` matches.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` on mismatch.
    fn compare_set(&self, current: Self::Value, new: Self::Value) -> Result<(), Self::Value>;
}

/// Trait for atomic wrappers that support arithmetic.
///
/// Integer and duration wrappers wrap around on overflow. Float wrappers
/// follow IEEE-754 arithmetic and implement `add` as a CAS retry loop.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicNumber: Atomic {
    /// Atomically adds `delta`, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The value after the addition.
    fn add(&self, delta: Self::Value) -> Self::Value;

    /// Atomically subtracts `delta`, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to subtract.
    ///
    /// # Returns
    ///
    /// The value after the subtraction.
    fn sub(&self, delta: Self::Value) -> Self::Value;
}
