/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # FFI Macro
//!
//! Provides a macro to generate the `extern "C"` function group of one cell
//! payload type.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate the C ABI surface of a cell type.
///
/// # Parameters
///
/// * `$value_type` - The payload type (e.g., `i64`)
/// * `$doc_type` - The type description for documentation (e.g., "integer")
/// * the exported symbol name of each of the eight operations
macro_rules! impl_ffi_cell {
    (
        $value_type:ty,
        $doc_type:expr,
        create: $create:ident,
        load: $load:ident,
        store: $store:ident,
        add: $add:ident,
        sub: $sub:ident,
        compare_and_exchange: $compare_and_exchange:ident,
        retain: $retain:ident,
        release: $release:ident $(,)?
    ) => {
        #[doc = concat!("Allocates a new atomic ", $doc_type, " cell holding `value`.")]
        ///
        /// The returned handle carries one reference owned by the caller,
        #[doc = concat!("given back with [`", stringify!($release), "`].")]
        /// Never returns null; allocation failure aborts the process.
        #[no_mangle]
        pub extern "C" fn $create(value: $value_type) -> *const AtomicCell<$value_type> {
            let handle = CellHandle::new(value);
            let raw = handle.into_raw();
            log::trace!("created atomic {} cell {:p}", $doc_type, raw);
            raw
        }

        /// Loads the current value with relaxed ordering.
        ///
        /// # Safety
        ///
        #[doc = concat!("`cell` must be a live handle from [`", stringify!($create), "`].")]
        #[no_mangle]
        pub unsafe extern "C" fn $load(cell: *const AtomicCell<$value_type>) -> $value_type {
            unsafe { expect_cell(cell) }.load()
        }

        /// Unconditionally replaces the value with relaxed ordering.
        ///
        /// # Safety
        ///
        #[doc = concat!("`cell` must be a live handle from [`", stringify!($create), "`].")]
        #[no_mangle]
        pub unsafe extern "C" fn $store(cell: *const AtomicCell<$value_type>, value: $value_type) {
            unsafe { expect_cell(cell) }.store(value);
        }

        /// Adds `value` with wraparound, returning the previous value.
        ///
        /// # Safety
        ///
        #[doc = concat!("`cell` must be a live handle from [`", stringify!($create), "`].")]
        #[no_mangle]
        pub unsafe extern "C" fn $add(
            cell: *const AtomicCell<$value_type>,
            value: $value_type,
        ) -> $value_type {
            unsafe { expect_cell(cell) }.add(value)
        }

        /// Subtracts `value` with wraparound, returning the previous value.
        ///
        /// # Safety
        ///
        #[doc = concat!("`cell` must be a live handle from [`", stringify!($create), "`].")]
        #[no_mangle]
        pub unsafe extern "C" fn $sub(
            cell: *const AtomicCell<$value_type>,
            value: $value_type,
        ) -> $value_type {
            unsafe { expect_cell(cell) }.sub(value)
        }

        /// Strong compare-and-exchange.
        ///
        /// Returns `true` if the value equalled `expected` and was replaced
        /// by `desired`.
        ///
        /// # Safety
        ///
        #[doc = concat!("`cell` must be a live handle from [`", stringify!($create), "`].")]
        #[no_mangle]
        pub unsafe extern "C" fn $compare_and_exchange(
            cell: *const AtomicCell<$value_type>,
            expected: $value_type,
            desired: $value_type,
        ) -> bool {
            unsafe { expect_cell(cell) }.compare_and_exchange(expected, desired)
        }

        /// Adds one reference to the cell for a second owner.
        ///
        /// # Safety
        ///
        #[doc = concat!("`cell` must be a live handle from [`", stringify!($create), "`].")]
        #[no_mangle]
        pub unsafe extern "C" fn $retain(cell: *const AtomicCell<$value_type>) {
            if let Err(err) = unsafe { CellHandle::retain_raw(cell) } {
                fatal(err);
            }
            log::trace!("retained atomic {} cell {:p}", $doc_type, cell);
        }

        /// Releases one reference, freeing the cell with the last one.
        ///
        /// A null `cell` is ignored.
        ///
        /// # Safety
        ///
        /// A non-null `cell` must be a handle whose reference the caller
        /// owns. It must not be used again through this reference.
        #[no_mangle]
        pub unsafe extern "C" fn $release(cell: *const AtomicCell<$value_type>) {
            if let Ok(handle) = unsafe { CellHandle::from_raw(cell) } {
                log::trace!(
                    "released atomic {} cell {:p} ({} refs before)",
                    $doc_type,
                    cell,
                    handle.strong_count()
                );
                drop(handle);
            }
        }
    };
}

pub(crate) use impl_ffi_cell;
