/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 16-bit signed integer
//!
//! Provides an atomic 16-bit signed integer wrapper whose value is only
//! reachable through `SeqCst` atomic operations.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;

impl_atomic_integer!(
    AtomicI16,
    std::sync::atomic::AtomicI16,
    i16,
    "16-bit signed integer"
);
