/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic pointer-sized unsigned integer
//!
//! Provides an atomic pointer-sized unsigned integer wrapper whose value is
//! only reachable through `SeqCst` atomic operations.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;

impl_atomic_integer!(
    AtomicUsize,
    std::sync::atomic::AtomicUsize,
    usize,
    "pointer-sized unsigned integer"
);
