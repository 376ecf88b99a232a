/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # C ABI
//!
//! `extern "C"` entry points declared in `include/atomic_bridge.h`.
//!
//! Handles are opaque pointers produced by the `*_create` functions. Each
//! one carries a reference that the caller gives back with `*_release`;
//! `*_retain` hands out an extra one. Every other function borrows the
//! handle. Passing null to a borrowing function is a contract violation and
//! aborts the process after logging it.
//!
//! # Author
//!
//! Haixing Hu

mod ffi_macro;

use crate::cell::{
    AtomicCell,
    CellValue,
};
use crate::error::HandleError;
use crate::handle::CellHandle;
use ffi_macro::impl_ffi_cell;

/// Borrows the cell behind a handle, aborting on a null handle.
///
/// # Safety
///
/// A non-null `ptr` must be a live handle for the same payload type.
unsafe fn expect_cell<'a, T: CellValue>(ptr: *const AtomicCell<T>) -> &'a AtomicCell<T> {
    match unsafe { CellHandle::borrow_raw(ptr) } {
        Ok(cell) => cell,
        Err(err) => fatal(err),
    }
}

// Unwinding out of an `extern "C"` function is not an option.
fn fatal(err: HandleError) -> ! {
    log::error!("{err}; aborting");
    std::process::abort()
}

impl_ffi_cell!(
    i64,
    "integer",
    create: atomic_integer_create,
    load: atomic_integer_load,
    store: atomic_integer_store,
    add: atomic_integer_add,
    sub: atomic_integer_sub,
    compare_and_exchange: atomic_integer_compare_and_exchange,
    retain: atomic_integer_retain,
    release: atomic_integer_release,
);

impl_ffi_cell!(
    bool,
    "boolean",
    create: atomic_boolean_create,
    load: atomic_boolean_load,
    store: atomic_boolean_store,
    add: atomic_boolean_add,
    sub: atomic_boolean_sub,
    compare_and_exchange: atomic_boolean_compare_and_exchange,
    retain: atomic_boolean_retain,
    release: atomic_boolean_release,
);
