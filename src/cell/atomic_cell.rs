/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Cell
//!
//! Provides the generic atomic cell shared by every payload type.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::cell::traits::CellValue;
use crate::sync::Ordering;

/// Atomic cell holding one value of a [`CellValue`] payload type.
///
/// All methods are thread-safe and never block. A cell is usually shared
/// through a [`CellHandle`](crate::CellHandle), which owns it on the heap.
///
/// # Memory Ordering Contract
///
/// The ordering is fixed and the same for every operation: **relaxed**.
///
/// - Every operation is indivisible. No torn value is ever observed and no
///   concurrent update is ever lost.
/// - All operations on one cell fall into a single total order.
/// - No operation orders accesses to *other* memory locations. A cell is not
///   a fence and must not be used to publish unrelated data. Callers that
///   need a publication barrier must supply a stronger primitive.
///
/// `compare_and_exchange` is issued with `SeqCst`, which is strictly
/// stronger. Callers must still rely on relaxed guarantees only.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_bridge::AtomicInteger;
///
/// let cell = AtomicInteger::new(5);
/// assert!(cell.compare_and_exchange(5, 9));
/// assert_eq!(cell.load(), 9);
/// assert!(!cell.compare_and_exchange(5, 1));
/// assert_eq!(cell.load(), 9);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicCell<T: CellValue> {
    inner: T::Repr,
}

impl<T: CellValue> AtomicCell<T> {
    /// Ordering used by `load`, `store`, `add` and `sub`.
    pub const ORDERING: Ordering = Ordering::Relaxed;

    /// Creates a new cell holding `value`.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            inner: T::new_repr(value),
        }
    }

    /// Loads the current value.
    ///
    /// The returned value was held by the cell at some instant during the
    /// call. It may already be stale relative to operations still in flight
    /// on other threads.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn load(&self) -> T {
        T::load(&self.inner, Self::ORDERING)
    }

    /// Unconditionally replaces the value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    #[inline]
    pub fn store(&self, value: T) {
        T::store(&self.inner, value, Self::ORDERING);
    }

    /// Adds `delta` to the value, returning the value held before.
    ///
    /// Wraps on overflow. See the payload type for the exact meaning of
    /// "add" (the boolean cell toggles rather than saturates).
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The old value before adding.
    #[inline]
    pub fn add(&self, delta: T) -> T {
        T::fetch_add(&self.inner, delta, Self::ORDERING)
    }

    /// Subtracts `delta` from the value, returning the value held before.
    ///
    /// Wraps on overflow, like [`add`](Self::add).
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to subtract.
    ///
    /// # Returns
    ///
    /// The old value before subtracting.
    #[inline]
    pub fn sub(&self, delta: T) -> T {
        T::fetch_sub(&self.inner, delta, Self::ORDERING)
    }

    /// Replaces the value with `desired` if it currently equals `expected`.
    ///
    /// This is a strong compare-and-exchange: a `false` result always means
    /// the value differed from `expected` at the moment of comparison. It
    /// never fails spuriously under contention. Retry loops belong to the
    /// caller.
    ///
    /// # Parameters
    ///
    /// * `expected` - The value the cell must hold for the exchange.
    /// * `desired` - The value to store on a match.
    ///
    /// # Returns
    ///
    /// `true` if the value matched and was replaced, `false` otherwise.
    #[inline]
    pub fn compare_and_exchange(&self, expected: T, desired: T) -> bool {
        T::compare_exchange(
            &self.inner,
            expected,
            desired,
            Ordering::SeqCst,
            Ordering::SeqCst,
        )
        .is_ok()
    }
}

impl<T: CellValue> Default for AtomicCell<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: CellValue> From<T> for AtomicCell<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: CellValue> fmt::Debug for AtomicCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicCell")
            .field("kind", &T::KIND)
            .field("value", &self.load())
            .finish()
    }
}

impl<T: CellValue> fmt::Display for AtomicCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load())
    }
}
