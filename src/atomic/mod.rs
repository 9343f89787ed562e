/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Types
//!
//! Wrapper types whose value slot is only reachable through atomic
//! operations. Numeric wrappers sit directly on top of the
//! `std::sync::atomic` integers; reference-type wrappers sit on top of an
//! epoch-reclaimed pointer slot.
//!
//! Every operation uses `SeqCst` ordering, so all operations on one wrapper
//! instance form a single total order observed identically by every thread.
//! Nothing is promised across two different instances.
//!
//! # Author
//!
//! Haixing Hu

mod atomic_integer_macro;

mod atomic_bool;
mod atomic_duration;
mod atomic_error;
mod atomic_f32;
mod atomic_f64;
mod atomic_i16;
mod atomic_i32;
mod atomic_i64;
mod atomic_i8;
mod atomic_isize;
mod atomic_pointer;
mod atomic_string;
mod atomic_u16;
mod atomic_u32;
mod atomic_u64;
mod atomic_u8;
mod atomic_usize;
mod atomic_value;
mod holder;
mod no_copy;
mod traits;

pub use atomic_bool::AtomicBool;
pub use atomic_duration::AtomicDuration;
pub use atomic_error::{
    AtomicError,
    SharedError,
};
pub use atomic_f32::AtomicF32;
pub use atomic_f64::AtomicF64;
pub use atomic_i16::AtomicI16;
pub use atomic_i32::AtomicI32;
pub use atomic_i64::AtomicI64;
pub use atomic_i8::AtomicI8;
pub use atomic_isize::AtomicIsize;
pub use atomic_pointer::AtomicPointer;
pub use atomic_string::AtomicString;
pub use atomic_u16::AtomicU16;
pub use atomic_u32::AtomicU32;
pub use atomic_u64::AtomicU64;
pub use atomic_u8::AtomicU8;
pub use atomic_usize::AtomicUsize;
pub use atomic_value::AtomicValue;
pub use no_copy::NoCopy;
pub use traits::{
    Atomic,
    AtomicNumber,
};
