/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Holder
//!
//! The atomically swappable box behind the reference-type wrappers.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::Ordering;

use crossbeam_epoch::{
    self as epoch,
    Atomic as EpochAtomic,
    Owned,
};

/// A pointer-sized slot holding an owning handle to a heap-boxed `T`.
///
/// The slot starts empty and, once written, always holds a value: there is
/// no way to store "nothing". Every write installs a freshly boxed value by
/// swapping or comparing the handle, never the boxed content. Replaced boxes
/// are handed to the epoch collector, so a reader that loaded the old handle
/// just before the swap can still clone from it safely.
pub(crate) struct AtomicHolder<T> {
    slot: EpochAtomic<T>,
}

impl<T> AtomicHolder<T>
where
    T: Send + Sync,
{
    pub(crate) fn new() -> Self {
        Self {
            slot: EpochAtomic::null(),
        }
    }

    /// Clones the current value out of the slot, or `None` if nothing has
    /// been stored yet.
    pub(crate) fn load(&self) -> Option<T>
    where
        T: Clone,
    {
        let guard = &epoch::pin();
        let current = self.slot.load(Ordering::SeqCst, guard);
        // SAFETY: the pointee is only retired through `defer_destroy`, which
        // cannot run while `guard` keeps this thread pinned.
        unsafe { current.as_ref() }.cloned()
    }

    pub(crate) fn store(&self, value: T) {
        let guard = &epoch::pin();
        let old = self.slot.swap(Owned::new(value), Ordering::SeqCst, guard);
        if !old.is_null() {
            // SAFETY: `old` was unlinked by the swap above, so no new reader
            // can reach it; existing readers are covered by the epoch.
            unsafe { guard.defer_destroy(old) };
        }
    }

    /// Installs `value` and returns a clone of the value it replaced.
    pub(crate) fn swap(&self, value: T) -> Option<T>
    where
        T: Clone,
    {
        let guard = &epoch::pin();
        let old = self.slot.swap(Owned::new(value), Ordering::SeqCst, guard);
        // SAFETY: see `store`; the clone happens before the box is retired
        // and the guard outlives both.
        let previous = unsafe { old.as_ref() }.cloned();
        if !old.is_null() {
            unsafe { guard.defer_destroy(old) };
        }
        previous
    }

    /// Installs `new` only if the current value compares equal to
    /// `current`. An empty slot never matches.
    pub(crate) fn compare_and_swap<Q>(&self, current: &Q, new: T) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.compare_and_swap_by(|value| value.map_or(false, |value| value == current), new)
    }

    /// Installs `new` only if `matches` accepts the current content, with
    /// `None` standing for the empty slot.
    ///
    /// The handle can be replaced by an equal value between the check and
    /// the exchange, in which case the check is repeated against the newer
    /// box.
    pub(crate) fn compare_and_swap_by<F>(&self, matches: F, new: T) -> bool
    where
        F: Fn(Option<&T>) -> bool,
    {
        let guard = &epoch::pin();
        let mut new = Owned::new(new);
        loop {
            let observed = self.slot.load(Ordering::SeqCst, guard);
            // SAFETY: protected by `guard`, as in `load`.
            if !matches(unsafe { observed.as_ref() }) {
                return false;
            }
            match self.slot.compare_exchange(
                observed,
                new,
                Ordering::SeqCst,
                Ordering::SeqCst,
                guard,
            ) {
                Ok(_) => {
                    if !observed.is_null() {
                        // SAFETY: unlinked by the successful exchange.
                        unsafe { guard.defer_destroy(observed) };
                    }
                    return true;
                }
                Err(err) => new = err.new,
            }
        }
    }
}

impl<T> Drop for AtomicHolder<T> {
    fn drop(&mut self) {
        // SAFETY: `&mut self` proves no other thread can reach the slot.
        unsafe {
            let guard = epoch::unprotected();
            let current = self.slot.load(Ordering::Relaxed, guard);
            if !current.is_null() {
                drop(current.into_owned());
            }
        }
    }
}
