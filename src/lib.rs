/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-atomic-bridge
//!
//! Heap-allocated atomic cells for callers that cannot issue atomic machine
//! instructions themselves but can call opaque foreign functions.
//!
//! The crate exposes two payload types through one generic cell:
//!
//! - [`AtomicInteger`]: a signed 64-bit integer cell
//! - [`AtomicBoolean`]: a boolean cell
//!
//! Each cell supports `load`, `store`, `add`, `sub` and a strong
//! `compare_and_exchange`. Every operation is a single indivisible step with
//! a fixed **relaxed** ordering contract: it never tears and never loses an
//! update, but it does not order accesses to any other memory location.
//!
//! Rust callers own cells through the reference-counted [`CellHandle`].
//! Foreign callers receive the same handle as an opaque pointer from the
//! `extern "C"` functions in [`ffi`] and give it back with the matching
//! `*_release` function.
//!
//! ## Platform Support
//!
//! The integer payload is a 64-bit `i64` (`int64_t` in C) on every target,
//! so the crate requires native 64-bit atomics (`target_has_atomic = "64"`)
//! and fails to build where they are missing.
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_bridge::IntegerHandle;
//! use std::thread;
//!
//! let counter = IntegerHandle::new(0);
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let counter = counter.clone();
//!     handles.push(thread::spawn(move || {
//!         for _ in 0..100 {
//!             counter.add(1);
//!         }
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(counter.load(), 1000);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(not(target_has_atomic = "64"))]
compile_error!("prism3-atomic-bridge requires native 64-bit atomics");

pub mod cell;
pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod handle;

mod sync;

pub use cell::{
    AtomicBoolean,
    AtomicCell,
    AtomicInteger,
    CellValue,
};
pub use error::HandleError;
pub use handle::{
    BooleanHandle,
    CellHandle,
    IntegerHandle,
};
