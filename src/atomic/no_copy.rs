/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # No-Copy Marker
//!
//! # Author
//!
//! Haixing Hu

/// Zero-sized marker that keeps its container from being duplicated.
///
/// The marker implements neither `Clone` nor `Copy`, so neither can any
/// struct that embeds it without a hand-written impl. None of the wrappers
/// in this crate write one. Once a wrapper is shared by reference the
/// borrow checker also rules out moving it, so the slot can never be
/// observed at two addresses.
///
/// Embed it as a field to give your own atomic-bearing structs the same
/// guarantee:
///
/// ```rust
/// use prism3_atom::{AtomicU64, NoCopy};
///
/// struct Stats {
///     _nocopy: NoCopy,
///     hits: AtomicU64,
/// }
///
/// let stats = Stats {
///     _nocopy: NoCopy::new(),
///     hits: AtomicU64::default(),
/// };
/// stats.hits.add(1);
/// ```
///
/// # Author
///
/// Haixing Hu
#[derive(Default)]
pub struct NoCopy;

impl NoCopy {
    /// Creates the marker.
    #[inline]
    pub const fn new() -> Self {
        NoCopy
    }
}
