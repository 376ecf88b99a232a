/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Boolean
//!
//! The boolean instantiation of [`AtomicCell`].
//!
//! # Author
//!
//! Haixing Hu

use crate::cell::atomic_cell::AtomicCell;
use crate::cell::traits::CellValue;
use crate::sync::{
    AtomicBool,
    Ordering,
};

/// Atomic boolean cell.
///
/// `load`, `store` and `compare_and_exchange` behave exactly as for the
/// integer cell.
///
/// # `add` and `sub` Are Not Logical Operations
///
/// They are integer fetch-add / fetch-sub on a one-bit value, with
/// wraparound: `true` counts as 1 and `false` as 0.
///
/// - `add(true)` and `sub(true)` toggle the value (`1 + 1` and `0 - 1` both
///   wrap modulo 2).
/// - `add(false)` and `sub(false)` leave it unchanged.
///
/// Both return the previous value. This is neither OR nor AND-NOT. New
/// callers should not rely on it; toggle with a `load` plus
/// `compare_and_exchange` loop instead.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_bridge::AtomicBoolean;
///
/// let flag = AtomicBoolean::new(false);
/// assert_eq!(flag.add(true), false);
/// assert_eq!(flag.load(), true);
/// assert_eq!(flag.add(true), true);
/// assert_eq!(flag.load(), false);
/// ```
pub type AtomicBoolean = AtomicCell<bool>;

impl CellValue for bool {
    type Repr = AtomicBool;

    const KIND: &'static str = "boolean";

    #[inline]
    fn new_repr(value: bool) -> AtomicBool {
        AtomicBool::new(value)
    }

    #[inline]
    fn load(repr: &AtomicBool, order: Ordering) -> bool {
        repr.load(order)
    }

    #[inline]
    fn store(repr: &AtomicBool, value: bool, order: Ordering) {
        repr.store(value, order);
    }

    // One-bit wrapping add is XOR, and keeps the stored byte a valid bool.
    #[inline]
    fn fetch_add(repr: &AtomicBool, value: bool, order: Ordering) -> bool {
        repr.fetch_xor(value, order)
    }

    // Modulo 2, subtraction is the same operation as addition.
    #[inline]
    fn fetch_sub(repr: &AtomicBool, value: bool, order: Ordering) -> bool {
        repr.fetch_xor(value, order)
    }

    #[inline]
    fn compare_exchange(
        repr: &AtomicBool,
        expected: bool,
        desired: bool,
        success: Ordering,
        failure: Ordering,
    ) -> Result<bool, bool> {
        repr.compare_exchange(expected, desired, success, failure)
    }
}
