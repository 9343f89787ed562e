/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

/// Macro to generate the common test suite for atomic integer types.
macro_rules! test_atomic_integer {
    ($atomic_type:ident, $value_type:ty, $test_mod:ident) => {
        mod $test_mod {
            use prism3_atom::{
                $atomic_type,
                Atomic,
                AtomicNumber,
            };
            use std::sync::Arc;
            use std::thread;

            #[test]
            fn test_default_is_zero() {
                let atomic = <$atomic_type>::default();
                assert_eq!(atomic.value(), 0);
            }

            #[test]
            fn test_new() {
                let atomic = <$atomic_type>::new(42);
                assert_eq!(atomic.value(), 42);
            }

            #[test]
            fn test_from() {
                let atomic = <$atomic_type>::from(100);
                assert_eq!(atomic.value(), 100);
            }

            #[test]
            fn test_set_value() {
                let atomic = <$atomic_type>::default();
                atomic.set(42);
                assert_eq!(atomic.value(), 42);
                atomic.set(<$value_type>::MAX);
                assert_eq!(atomic.value(), <$value_type>::MAX);
                atomic.set(<$value_type>::MIN);
                assert_eq!(atomic.value(), <$value_type>::MIN);
            }

            #[test]
            fn test_swap() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.swap(20), 10);
                assert_eq!(atomic.value(), 20);
            }

            #[test]
            fn test_compare_and_swap_success() {
                let atomic = <$atomic_type>::new(10);
                assert!(atomic.compare_and_swap(10, 20));
                assert_eq!(atomic.value(), 20);
            }

            #[test]
            fn test_compare_and_swap_failure() {
                let atomic = <$atomic_type>::new(10);
                assert!(!atomic.compare_and_swap(15, 20));
                assert_eq!(atomic.value(), 10);
            }

            #[test]
            fn test_compare_set_reports_actual() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.compare_set(15, 20), Err(10));
                assert_eq!(atomic.compare_set(10, 20), Ok(()));
                assert_eq!(atomic.value(), 20);
            }

            #[test]
            fn test_add_returns_new_value() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.add(5), 15);
                assert_eq!(atomic.value(), 15);
            }

            #[test]
            fn test_sub_returns_new_value() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.sub(3), 7);
                assert_eq!(atomic.value(), 7);
            }

            #[test]
            fn test_sub_then_add_restores() {
                let atomic = <$atomic_type>::new(37);
                assert_eq!(atomic.sub(37), 0);
                assert_eq!(atomic.add(37), 37);
            }

            #[test]
            fn test_add_wraps_at_max() {
                let atomic = <$atomic_type>::new(<$value_type>::MAX);
                assert_eq!(atomic.add(1), <$value_type>::MIN);

                atomic.set(<$value_type>::MAX);
                assert_eq!(atomic.add(3), <$value_type>::MIN.wrapping_add(2));
            }

            #[test]
            fn test_sub_wraps_at_min() {
                let atomic = <$atomic_type>::new(<$value_type>::MIN);
                assert_eq!(atomic.sub(1), <$value_type>::MAX);

                atomic.set(<$value_type>::MIN);
                assert_eq!(atomic.sub(3), <$value_type>::MAX.wrapping_sub(2));
            }

            #[test]
            fn test_sub_of_max_delta() {
                let atomic = <$atomic_type>::new(0);
                assert_eq!(
                    atomic.sub(<$value_type>::MAX),
                    (0 as $value_type).wrapping_sub(<$value_type>::MAX)
                );
            }

            #[test]
            fn test_trait_dispatch() {
                fn bump<A: AtomicNumber<Value = $value_type>>(atomic: &A) -> $value_type {
                    atomic.set(1);
                    atomic.add(2)
                }

                let atomic = <$atomic_type>::default();
                assert_eq!(bump(&atomic), 3);
                assert_eq!(Atomic::value(&atomic), 3);
            }

            #[test]
            fn test_debug_display() {
                let atomic = <$atomic_type>::new(42);
                assert_eq!(format!("{}", atomic), "42");
                assert_eq!(
                    format!("{:?}", atomic),
                    concat!(stringify!($atomic_type), " { value: 42 }")
                );
            }

            #[test]
            fn test_inner_is_shared_slot() {
                let atomic = <$atomic_type>::new(1);
                atomic
                    .inner()
                    .store(9, std::sync::atomic::Ordering::SeqCst);
                assert_eq!(atomic.value(), 9);
            }

            #[test]
            fn test_concurrent_add() {
                let counter = Arc::new(<$atomic_type>::default());
                let mut handles = vec![];

                for _ in 0..10 {
                    let counter = counter.clone();
                    let handle = thread::spawn(move || {
                        for _ in 0..10 {
                            counter.add(1);
                        }
                    });
                    handles.push(handle);
                }

                for handle in handles {
                    handle.join().unwrap();
                }

                assert_eq!(counter.value(), 100);
            }
        }
    };
}
