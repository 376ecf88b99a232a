/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Cell Handles
//!
//! Reference-counted ownership of heap-allocated cells.
//!
//! A [`CellHandle`] owns one reference to a cell. Cloning adds a reference,
//! dropping releases one, and the cell is freed with the last reference.
//! The raw-pointer functions move references across a foreign boundary: the
//! pointer handed out by [`CellHandle::into_raw`] is the opaque handle a
//! foreign caller holds, and [`CellHandle::from_raw`] takes it back.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::cell::{
    AtomicCell,
    CellValue,
};
use crate::error::HandleError;

/// Owning, reference-counted handle to an [`AtomicCell`].
///
/// # Example
///
/// ```rust
/// use prism3_atomic_bridge::BooleanHandle;
///
/// let flag = BooleanHandle::new(false);
/// let other = flag.clone();
/// other.store(true);
/// assert!(flag.load());
/// assert!(flag.ptr_eq(&other));
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct CellHandle<T: CellValue> {
    cell: Arc<AtomicCell<T>>,
}

/// Handle to an integer cell.
pub type IntegerHandle = CellHandle<i64>;

/// Handle to a boolean cell.
pub type BooleanHandle = CellHandle<bool>;

impl<T: CellValue> CellHandle<T> {
    /// Allocates a new cell holding `value`.
    ///
    /// Allocation failure aborts the process.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            cell: Arc::new(AtomicCell::new(value)),
        }
    }

    /// Gets the cell this handle owns.
    #[inline]
    pub fn cell(&self) -> &AtomicCell<T> {
        &self.cell
    }

    /// Returns `true` if both handles address the same cell.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }

    /// Number of live references to the cell.
    #[inline]
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.cell)
    }

    /// Consumes the handle, returning the opaque pointer that now carries
    /// its reference.
    ///
    /// The reference is leaked until passed back to [`from_raw`](Self::from_raw).
    #[inline]
    pub fn into_raw(self) -> *const AtomicCell<T> {
        Arc::into_raw(self.cell)
    }

    /// Reclaims the reference carried by a pointer from
    /// [`into_raw`](Self::into_raw).
    ///
    /// # Errors
    ///
    /// [`HandleError::Null`] if `ptr` is null.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must come from `into_raw` for the same `T`, and the
    /// reference it carries must not have been reclaimed already.
    pub unsafe fn from_raw(ptr: *const AtomicCell<T>) -> Result<Self, HandleError> {
        check_non_null(ptr)?;
        let cell = unsafe { Arc::from_raw(ptr) };
        Ok(Self { cell })
    }

    /// Borrows the cell behind a raw pointer without touching its
    /// reference count.
    ///
    /// # Errors
    ///
    /// [`HandleError::Null`] if `ptr` is null.
    ///
    /// # Safety
    ///
    /// A non-null `ptr` must come from `into_raw` for the same `T`, and at
    /// least one reference must stay alive for `'a`.
    pub unsafe fn borrow_raw<'a>(ptr: *const AtomicCell<T>) -> Result<&'a AtomicCell<T>, HandleError> {
        check_non_null(ptr)?;
        Ok(unsafe { &*ptr })
    }

    /// Adds one reference to the cell behind a raw pointer.
    ///
    /// The new reference is released by a matching
    /// [`from_raw`](Self::from_raw) and drop.
    ///
    /// # Errors
    ///
    /// [`HandleError::Null`] if `ptr` is null.
    ///
    /// # Safety
    ///
    /// Same contract as [`borrow_raw`](Self::borrow_raw).
    pub unsafe fn retain_raw(ptr: *const AtomicCell<T>) -> Result<(), HandleError> {
        check_non_null(ptr)?;
        unsafe { Arc::increment_strong_count(ptr) };
        Ok(())
    }
}

fn check_non_null<T: CellValue>(ptr: *const AtomicCell<T>) -> Result<(), HandleError> {
    if ptr.is_null() {
        return Err(HandleError::Null { kind: T::KIND });
    }
    Ok(())
}

impl<T: CellValue> Clone for CellHandle<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: CellValue> Deref for CellHandle<T> {
    type Target = AtomicCell<T>;

    #[inline]
    fn deref(&self) -> &AtomicCell<T> {
        &self.cell
    }
}

impl<T: CellValue> Default for CellHandle<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: CellValue> From<T> for CellHandle<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: CellValue> fmt::Debug for CellHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellHandle")
            .field("cell", &*self.cell)
            .field("refs", &self.strong_count())
            .finish()
    }
}
