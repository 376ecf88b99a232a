/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
#![cfg(not(loom))]


#[cfg(feature = "ffi")]
mod ffi_tests;
mod handle_tests;
