/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Handle Errors
//!
//! The cell operations themselves cannot fail. The only recoverable error is
//! a raw handle that does not address a cell at all.
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

/// Errors raised when turning a raw pointer back into a cell handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandleError {
    /// The raw handle was a null pointer.
    #[error("null atomic {kind} handle")]
    Null {
        /// Payload kind of the expected cell, `"integer"` or `"boolean"`.
        kind: &'static str,
    },
}
