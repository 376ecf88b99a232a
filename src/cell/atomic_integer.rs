/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integer
//!
//! The signed 64-bit integer instantiation of [`AtomicCell`].
//!
//! # Author
//!
//! Haixing Hu

use crate::cell::atomic_cell::AtomicCell;
use crate::cell::traits::CellValue;
use crate::sync::{
    AtomicI64,
    Ordering,
};

/// Atomic signed 64-bit integer cell.
///
/// `add` and `sub` use two's-complement wraparound; they never report
/// overflow.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_bridge::AtomicInteger;
///
/// let cell = AtomicInteger::new(10);
/// assert_eq!(cell.add(5), 10);
/// assert_eq!(cell.load(), 15);
///
/// let cell = AtomicInteger::new(i64::MAX);
/// cell.add(1);
/// assert_eq!(cell.load(), i64::MIN);
/// ```
pub type AtomicInteger = AtomicCell<i64>;

impl CellValue for i64 {
    type Repr = AtomicI64;

    const KIND: &'static str = "integer";

    #[inline]
    fn new_repr(value: i64) -> AtomicI64 {
        AtomicI64::new(value)
    }

    #[inline]
    fn load(repr: &AtomicI64, order: Ordering) -> i64 {
        repr.load(order)
    }

    #[inline]
    fn store(repr: &AtomicI64, value: i64, order: Ordering) {
        repr.store(value, order);
    }

    #[inline]
    fn fetch_add(repr: &AtomicI64, value: i64, order: Ordering) -> i64 {
        repr.fetch_add(value, order)
    }

    #[inline]
    fn fetch_sub(repr: &AtomicI64, value: i64, order: Ordering) -> i64 {
        repr.fetch_sub(value, order)
    }

    #[inline]
    fn compare_exchange(
        repr: &AtomicI64,
        expected: i64,
        desired: i64,
        success: Ordering,
        failure: Ordering,
    ) -> Result<i64, i64> {
        repr.compare_exchange(expected, desired, success, failure)
    }
}
