/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! Atomic primitives backing the cells.
//!
//! Built with `--cfg loom`, the cells run on loom's model-checked atomics so
//! the concurrency tests can explore every interleaving. Otherwise the std
//! atomics are used directly.

#[cfg(loom)]
pub(crate) use loom::sync::atomic::{
    AtomicBool,
    AtomicI64,
};
#[cfg(not(loom))]
pub(crate) use std::sync::atomic::{
    AtomicBool,
    AtomicI64,
};

pub(crate) use std::sync::atomic::Ordering;
