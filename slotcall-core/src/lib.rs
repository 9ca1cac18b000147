//! # slotcall-core
//!
//! Core handler primitives for the slotcall dispatch tables.
//!
//! This crate has minimal dependencies and is designed to be imported by code
//! that only defines or hands out handlers (interrupt service routines,
//! driver callbacks) without pulling in the table implementations from the
//! `slotcall` crate.
//!
//! # Contents
//!
//! - [`Handler`]: a type-erased, allocation-free callable bound to a free
//!   function, a borrowed closure, or a receiver plus member function
//! - [`Id`]: the integer identifier type selecting a dispatch slot
//! - [`RangeError`]: the error returned by fallible registration APIs when
//!   an identifier falls outside a table's dispatch window

#![cfg_attr(not(test), no_std)]
#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;

pub use error::RangeError;
pub use handler::{Handler, Id};
