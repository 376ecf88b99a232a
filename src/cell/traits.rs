/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Cell Payload Trait
//!
//! Defines the closed set of payload types an [`AtomicCell`] can hold and the
//! primitive atomic steps each of them maps onto.
//!
//! # Author
//!
//! Haixing Hu
//!
//! [`AtomicCell`]: crate::cell::AtomicCell

use std::fmt;

use crate::sync::Ordering;

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for bool {}
}

/// A payload type storable in an [`AtomicCell`](crate::cell::AtomicCell).
///
/// This trait is sealed: it is implemented for `i64` and `bool` only. Each
/// method is one hardware atomic instruction on the backing representation.
///
/// # Author
///
/// Haixing Hu
pub trait CellValue:
    sealed::Sealed + Copy + Eq + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The atomic type the value is stored in.
    type Repr: Send + Sync;

    /// Payload name used in diagnostics.
    const KIND: &'static str;

    /// Creates the backing atomic holding `value`.
    fn new_repr(value: Self) -> Self::Repr;

    /// Atomically reads the value.
    fn load(repr: &Self::Repr, order: Ordering) -> Self;

    /// Atomically replaces the value.
    fn store(repr: &Self::Repr, value: Self, order: Ordering);

    /// Atomically adds `value` with wraparound, returning the previous value.
    fn fetch_add(repr: &Self::Repr, value: Self, order: Ordering) -> Self;

    /// Atomically subtracts `value` with wraparound, returning the previous
    /// value.
    fn fetch_sub(repr: &Self::Repr, value: Self, order: Ordering) -> Self;

    /// Strong compare-and-exchange.
    ///
    /// Returns `Ok(previous)` when the stored value equalled `expected` and
    /// was replaced by `desired`, or `Err(actual)` otherwise.
    fn compare_exchange(
        repr: &Self::Repr,
        expected: Self,
        desired: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self>;
}
