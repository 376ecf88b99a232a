/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_bridge::{
    BooleanHandle,
    HandleError,
    IntegerHandle,
};
use std::ptr;

#[test]
fn test_new_and_default() {
    let handle = IntegerHandle::new(3);
    assert_eq!(handle.load(), 3);
    assert_eq!(IntegerHandle::default().load(), 0);
    assert!(!BooleanHandle::default().load());
    assert!(BooleanHandle::from(true).load());
}

#[test]
fn test_clone_shares_cell() {
    let a = IntegerHandle::new(0);
    let b = a.clone();
    assert!(a.ptr_eq(&b));
    assert_eq!(a.strong_count(), 2);

    b.add(10);
    assert_eq!(a.load(), 10);

    drop(b);
    assert_eq!(a.strong_count(), 1);
}

#[test]
fn test_distinct_handles_are_distinct_cells() {
    let a = IntegerHandle::new(1);
    let b = IntegerHandle::new(1);
    assert!(!a.ptr_eq(&b));
    a.store(2);
    assert_eq!(b.load(), 1);
}

#[test]
fn test_into_raw_from_raw() {
    let raw = BooleanHandle::new(true).into_raw();
    assert!(!raw.is_null());

    let handle = unsafe { BooleanHandle::from_raw(raw) }.unwrap();
    assert!(handle.load());
    assert_eq!(handle.strong_count(), 1);
}

#[test]
fn test_from_raw_null() {
    let result = unsafe { IntegerHandle::from_raw(ptr::null()) };
    assert_eq!(result.unwrap_err(), HandleError::Null { kind: "integer" });
}

#[test]
fn test_debug() {
    let handle = IntegerHandle::new(12);
    let debug = format!("{:?}", handle);
    assert!(debug.contains("CellHandle"));
    assert!(debug.contains("12"));
    assert!(debug.contains("integer"));
}
