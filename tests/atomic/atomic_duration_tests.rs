/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atom::AtomicDuration;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn test_default_is_zero() {
    assert_eq!(AtomicDuration::default().value(), Duration::ZERO);
}

#[test]
fn test_set_sub_add() {
    let atomic = AtomicDuration::default();
    let v1 = Duration::from_nanos(1337);
    atomic.set(v1);
    assert_eq!(atomic.value(), v1);

    assert_eq!(atomic.sub(v1), Duration::ZERO);
    assert_eq!(atomic.add(v1), v1);
}

#[test]
fn test_compare_and_swap() {
    let atomic = AtomicDuration::new(Duration::from_nanos(1337));
    let v2 = Duration::from_nanos(987_654_321);

    assert!(!atomic.compare_and_swap(v2, v2));
    assert_eq!(atomic.value(), Duration::from_nanos(1337));

    assert!(atomic.compare_and_swap(Duration::from_nanos(1337), v2));
    assert_eq!(atomic.value(), v2);
}

#[test]
fn test_swap() {
    let atomic = AtomicDuration::new(Duration::from_secs(2));
    assert_eq!(atomic.swap(Duration::from_secs(3)), Duration::from_secs(2));
    assert_eq!(atomic.value(), Duration::from_secs(3));
}

#[test]
fn test_sub_below_zero_wraps() {
    let atomic = AtomicDuration::new(Duration::from_nanos(1));
    assert_eq!(atomic.sub(Duration::from_nanos(2)), Duration::from_nanos(u64::MAX));
    assert_eq!(atomic.add(Duration::from_nanos(2)), Duration::from_nanos(1));
}

#[test]
fn test_nanosecond_precision_is_kept() {
    let atomic = AtomicDuration::new(Duration::new(5, 123_456_789));
    assert_eq!(atomic.value(), Duration::new(5, 123_456_789));
}

#[test]
fn test_compare_and_swap_rejects_out_of_range_old() {
    // 2^64 ns, which reduces to zero modulo 2^64.
    let too_long = Duration::new(18_446_744_073, 709_551_616);
    let d = AtomicDuration::default();
    assert!(!d.compare_and_swap(too_long, Duration::from_secs(1)));
    assert_eq!(d.value(), Duration::ZERO);
    assert_eq!(
        d.compare_set(too_long, Duration::from_secs(1)),
        Err(Duration::ZERO)
    );
    assert_eq!(d.value(), Duration::ZERO);
}

#[test]
fn test_concurrent_add() {
    let atomic = Arc::new(AtomicDuration::default());
    let mut handles = vec![];

    for _ in 0..10 {
        let atomic = atomic.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                atomic.add(Duration::from_micros(1));
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(atomic.value(), Duration::from_millis(1));
}
