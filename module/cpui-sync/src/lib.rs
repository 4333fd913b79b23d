//! # Synchronization primitives
//!
//! The one primitive this workspace needs: a cell written once during
//! initialization and read for the rest of the module's lifetime.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod once_cell;

pub use once_cell::SyncOnceCell;
