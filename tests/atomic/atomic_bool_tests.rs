/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atom::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;

#[test]
fn test_default_is_false() {
    let flag = AtomicBool::default();
    assert!(!flag.value());
    assert_eq!(flag.inner().load(Ordering::SeqCst), 0);
}

#[test]
fn test_set_value() {
    let flag = AtomicBool::default();
    flag.set(true);
    assert!(flag.value());
    assert_eq!(flag.inner().load(Ordering::SeqCst), 1);
    flag.set(false);
    assert!(!flag.value());
}

#[test]
fn test_compare_and_swap() {
    let flag = AtomicBool::default();
    assert!(!flag.compare_and_swap(true, false));
    assert!(!flag.value());

    assert!(flag.compare_and_swap(false, true));
    assert!(flag.value());
}

#[test]
fn test_compare_set_reports_actual() {
    let flag = AtomicBool::new(true);
    assert_eq!(flag.compare_set(false, false), Err(true));
    assert_eq!(flag.compare_set(true, false), Ok(()));
    assert!(!flag.value());
}

#[test]
fn test_swap() {
    let flag = AtomicBool::new(true);
    assert!(flag.swap(true));
    assert!(flag.value());
    assert!(flag.swap(false));
    assert!(!flag.value());
    assert!(!flag.swap(false));
}

#[test]
fn test_nonzero_slot_reads_true() {
    let flag = AtomicBool::default();
    flag.inner().store(7, Ordering::SeqCst);
    assert!(flag.value());
    // Comparison happens on the encoded bits.
    assert!(!flag.compare_and_swap(true, false));
}

#[test]
fn test_from_and_format() {
    let flag = AtomicBool::from(true);
    assert_eq!(format!("{}", flag), "true");
    assert_eq!(format!("{:?}", flag), "AtomicBool { value: true }");
}

#[test]
fn test_only_one_thread_wins_the_flag() {
    let flag = Arc::new(AtomicBool::default());
    let mut handles = vec![];

    for _ in 0..10 {
        let flag = flag.clone();
        handles.push(thread::spawn(move || flag.compare_and_swap(false, true)));
    }

    let winners = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|won| *won)
        .count();
    assert_eq!(winners, 1);
    assert!(flag.value());
}
