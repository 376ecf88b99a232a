/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Cells
//!
//! One generic cell, [`AtomicCell<T>`], instantiated for the closed set of
//! payload types implementing [`CellValue`]: `i64` and `bool`.
//!
//! # Features
//!
//! - A single fixed relaxed ordering contract for every operation
//! - Strong compare-and-exchange that never fails spuriously
//! - Wrapping `add`/`sub` with per-payload semantics
//!
//! # Author
//!
//! Haixing Hu

mod atomic_boolean;
mod atomic_cell;
mod atomic_integer;
mod traits;

pub use atomic_boolean::AtomicBoolean;
pub use atomic_cell::AtomicCell;
pub use atomic_integer::AtomicInteger;
pub use traits::CellValue;
