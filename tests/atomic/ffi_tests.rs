/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_bridge::ffi::*;
use std::thread;

// Raw handles are plain addresses on the foreign side.
struct SendPtr<T>(*const T);

// Derived impls would demand `T: Copy`; the address is copyable regardless.
impl<T> Clone for SendPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SendPtr<T> {}

unsafe impl<T> Send for SendPtr<T> {}

#[test]
fn test_integer_surface() {
    let cell = atomic_integer_create(10);
    assert!(!cell.is_null());
    unsafe {
        assert_eq!(atomic_integer_add(cell, 5), 10);
        assert_eq!(atomic_integer_load(cell), 15);
        assert_eq!(atomic_integer_sub(cell, 20), 15);
        assert_eq!(atomic_integer_load(cell), -5);

        atomic_integer_store(cell, 5);
        assert!(atomic_integer_compare_and_exchange(cell, 5, 9));
        assert_eq!(atomic_integer_load(cell), 9);
        assert!(!atomic_integer_compare_and_exchange(cell, 5, 1));
        assert_eq!(atomic_integer_load(cell), 9);

        atomic_integer_release(cell);
    }
}

#[test]
fn test_boolean_surface() {
    let cell = atomic_boolean_create(false);
    unsafe {
        assert!(!atomic_boolean_add(cell, true));
        assert!(atomic_boolean_load(cell));
        assert!(atomic_boolean_add(cell, true));
        assert!(!atomic_boolean_load(cell));

        assert!(!atomic_boolean_sub(cell, true));
        assert!(atomic_boolean_sub(cell, false));
        assert!(atomic_boolean_load(cell));

        atomic_boolean_store(cell, false);
        assert!(atomic_boolean_compare_and_exchange(cell, false, true));
        assert!(!atomic_boolean_compare_and_exchange(cell, false, true));
        assert!(atomic_boolean_load(cell));

        atomic_boolean_release(cell);
    }
}

#[test]
fn test_retain_release() {
    let cell = atomic_integer_create(1);
    unsafe {
        atomic_integer_retain(cell);
        atomic_integer_release(cell);
        // Still alive through the second reference
        assert_eq!(atomic_integer_add(cell, 1), 1);
        atomic_integer_release(cell);
    }
}

#[test]
fn test_boolean_retain_release() {
    let cell = atomic_boolean_create(false);
    unsafe {
        atomic_boolean_retain(cell);
        atomic_boolean_release(cell);
        assert!(!atomic_boolean_add(cell, true));
        assert!(atomic_boolean_load(cell));
        atomic_boolean_release(cell);
    }
}

#[test]
fn test_handle_copied_into_many_threads() {
    let cell = SendPtr(atomic_boolean_create(false));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(move || {
                let cell = cell;
                unsafe { atomic_boolean_add(cell.0, true) };
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    unsafe {
        assert!(!atomic_boolean_load(cell.0));
        atomic_boolean_release(cell.0);
    }
}

#[test]
fn test_release_null_is_ignored() {
    unsafe {
        atomic_integer_release(std::ptr::null());
        atomic_boolean_release(std::ptr::null());
    }
}

#[test]
fn test_concurrent_add_through_ffi() {
    let cell = SendPtr(atomic_integer_create(0));
    let mut handles = vec![];

    for _ in 0..8 {
        handles.push(thread::spawn(move || {
            let cell = cell;
            for _ in 0..10_000 {
                unsafe { atomic_integer_add(cell.0, 1) };
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    unsafe {
        assert_eq!(atomic_integer_load(cell.0), 80_000);
        atomic_integer_release(cell.0);
    }
}
