/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atom::AtomicValue;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, PartialEq)]
struct TestData {
    value: i32,
    name: String,
}

fn data(value: i32, name: &str) -> TestData {
    TestData {
        value,
        name: name.to_string(),
    }
}

#[test]
fn test_default_is_none() {
    let v = AtomicValue::<TestData>::default();
    assert!(v.value().is_none());
}

#[test]
fn test_set_value() {
    let v = AtomicValue::default();
    v.set(data(1, "first"));
    assert_eq!(v.value(), Some(data(1, "first")));
    v.set(data(2, "second"));
    assert_eq!(v.value(), Some(data(2, "second")));
}

#[test]
fn test_swap() {
    let v = AtomicValue::new(data(1, "first"));
    assert_eq!(v.swap(data(2, "second")), Some(data(1, "first")));
    assert_eq!(v.value(), Some(data(2, "second")));

    let empty = AtomicValue::default();
    assert_eq!(empty.swap(7u32), None);
}

#[test]
fn test_compare_and_swap() {
    let v = AtomicValue::from(data(1, "first"));
    assert!(!v.compare_and_swap(&data(9, "other"), data(2, "second")));
    assert_eq!(v.value(), Some(data(1, "first")));
    assert!(v.compare_and_swap(&data(1, "first"), data(2, "second")));
    assert_eq!(v.value(), Some(data(2, "second")));
}

#[test]
fn test_store_type_is_fixed_by_parameter() {
    // `set` and `swap` only accept `T`; `atomic.set("x")` on an
    // `AtomicValue<u32>` is rejected at compile time.
    let set: fn(&AtomicValue<u32>, u32) = AtomicValue::<u32>::set;
    let swap: fn(&AtomicValue<u32>, u32) -> Option<u32> = AtomicValue::<u32>::swap;

    let atomic = AtomicValue::<u32>::default();
    set(&atomic, 7);
    assert_eq!(swap(&atomic, 8), Some(7));
    assert_eq!(atomic.value(), Some(8));
}

#[test]
fn test_arc_payload_is_shared_not_copied() {
    let payload = Arc::new(data(42, "shared"));
    let v = AtomicValue::new(payload.clone());
    let loaded = v.value().unwrap();
    assert!(Arc::ptr_eq(&loaded, &payload));
}

#[test]
fn test_debug() {
    let v = AtomicValue::new(5u8);
    assert_eq!(format!("{:?}", v), "AtomicValue { value: Some(5) }");
}

#[test]
fn test_concurrent_compare_and_swap_counts() {
    let v = Arc::new(AtomicValue::new(0u64));
    let mut handles = vec![];

    for _ in 0..8 {
        let v = v.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..250 {
                loop {
                    let current = v.value().unwrap();
                    if v.compare_and_swap(&current, current + 1) {
                        break;
                    }
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(v.value(), Some(2000));
}
