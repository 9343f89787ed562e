/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atom
//!
//! Typed wrappers that enforce atomic access to shared values.
//!
//! Every wrapper owns a single value slot that is only ever touched through
//! atomic instructions. There is no way to perform a plain read or write of
//! the slot, and no wrapper can be cloned or copied, so sharing one between
//! threads is always data-race free.
//!
//! ## Wrappers
//!
//! - Boolean: `AtomicBool`
//! - Integers: `AtomicI8`, `AtomicU8`, `AtomicI16`, `AtomicU16`,
//!   `AtomicI32`, `AtomicU32`, `AtomicI64`, `AtomicU64`, `AtomicIsize`,
//!   `AtomicUsize`
//! - Floating point: `AtomicF32`, `AtomicF64`
//! - Time: `AtomicDuration`
//! - Raw address: `AtomicPointer<T>`
//! - Reference types: `AtomicString`, `AtomicError`, `AtomicValue<T>`
//!
//! All of them share the `value` / `set` / `swap` / `compare_and_swap`
//! contract of the [`Atomic`] trait. Numeric wrappers add `add` / `sub`
//! through [`AtomicNumber`].
//!
//! ## Example
//!
//! ```rust
//! use prism3_atom::AtomicI32;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let counter = Arc::new(AtomicI32::default());
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let counter = counter.clone();
//!     handles.push(thread::spawn(move || {
//!         for _ in 0..100 {
//!             counter.add(1);
//!         }
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(counter.value(), 1000);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;

// Re-export all atomic types and traits
pub use atomic::{
    Atomic,
    AtomicBool,
    AtomicDuration,
    AtomicError,
    AtomicF32,
    AtomicF64,
    AtomicI16,
    AtomicI32,
    AtomicI64,
    AtomicI8,
    AtomicIsize,
    AtomicNumber,
    AtomicPointer,
    AtomicString,
    AtomicU16,
    AtomicU32,
    AtomicU64,
    AtomicU8,
    AtomicUsize,
    AtomicValue,
    NoCopy,
    SharedError,
};
