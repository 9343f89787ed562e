/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic pointer-sized signed integer
//!
//! Provides an atomic pointer-sized signed integer wrapper whose value is only
//! reachable through `SeqCst` atomic operations.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::Ordering;

use crate::atomic::atomic_integer_macro::impl_atomic_integer;

impl_atomic_integer!(
    AtomicIsize,
    std::sync::atomic::AtomicIsize,
    isize,
    "pointer-sized signed integer"
);
