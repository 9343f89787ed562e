/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atom::{
    AtomicError,
    SharedError,
};
use std::fmt;
use std::io;
use std::sync::Arc;

#[derive(Debug)]
struct Failure(&'static str);

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for Failure {}

fn shared(msg: &'static str) -> SharedError {
    Arc::new(Failure(msg))
}

#[test]
fn test_default_is_none() {
    let e = AtomicError::default();
    assert!(e.value().is_none());
}

#[test]
fn test_set_value_keeps_identity() {
    let e = AtomicError::default();
    let a = shared("a");
    e.set(Some(a.clone()));
    let v = e.value().expect("value is still none");
    assert!(Arc::ptr_eq(&v, &a));

    let b = shared("b");
    e.set(Some(b.clone()));
    assert!(Arc::ptr_eq(&e.value().unwrap(), &b));
}

#[test]
fn test_set_none() {
    let e = AtomicError::default();
    e.set(None);
    assert!(e.value().is_none());
}

#[test]
fn test_set_error_then_none() {
    let e = AtomicError::default();
    e.set(Some(shared("boom")));
    e.set(None);
    assert!(e.value().is_none());
}

#[test]
fn test_set_error_and_clear() {
    let e = AtomicError::default();
    e.set_error(io::Error::new(io::ErrorKind::Other, "disk full"));
    assert_eq!(e.value().unwrap().to_string(), "disk full");
    e.clear();
    assert!(e.value().is_none());
}

#[test]
fn test_swap() {
    let e = AtomicError::new(None);
    assert!(e.swap(Some(shared("first"))).is_none());
    let old = e.swap(None).unwrap();
    assert_eq!(old.to_string(), "first");
    assert!(e.swap(Some(shared("second"))).is_none());
}

#[test]
fn test_downcast_stored_error() {
    let e = AtomicError::new(Some(shared("typed")));
    let v = e.value().unwrap();
    assert_eq!(v.downcast_ref::<Failure>().unwrap().0, "typed");
}
