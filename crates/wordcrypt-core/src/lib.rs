// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # wordcrypt_core
//!
//! Building blocks shared by every wordcrypt algorithm:
//!
//! - [`WordArray`]: a buffer of big-endian packed 32-bit words plus a count of
//!   significant bytes. Zeroized on drop.
//! - [`Codec`] and its implementations [`Hex`], [`Base64`], [`Latin1`], [`Utf8`]:
//!   text <-> buffer conversions.
//! - [`BufferedBlock`]: incremental block buffering, generic over a
//!   [`BlockFunction`].
//! - [`Hasher`]: the Fresh -> Accumulating -> Finalized digest engine, generic
//!   over a [`HashAlgorithm`].
//!
//! ## Example
//!
//! ```rust
//! use wordcrypt_core::{Base64, Codec, Hex, WordArray};
//!
//! let mut buffer = Hex::parse("cafe").expect("valid hex");
//! buffer.concat(&WordArray::from_bytes(b"\x01"));
//!
//! assert_eq!(buffer.to_string(), "cafe01");
//! assert_eq!(Base64::stringify(&buffer).expect("infallible"), "yv4B");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod buffered_block;
mod codec;
mod error;
mod hasher;
mod input;
mod word_array;

pub use buffered_block::{BlockFunction, BufferedBlock};
pub use codec::{Base64, Codec, Hex, Latin1, Utf8};
pub use error::{DecodeError, LifecycleError};
pub use hasher::{HashAlgorithm, Hasher, HasherState};
pub use input::Input;
pub use word_array::WordArray;
