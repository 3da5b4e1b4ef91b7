// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # wordcrypt_rand
//!
//! Cryptographically secure entropy for the wordcrypt primitives.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for CSPRNGs
//!
//! ## Example
//!
//! ```rust
//! use wordcrypt_rand::{EntropySource, SystemEntropySource};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut salt = [0u8; 16];
//! entropy.fill_bytes(&mut salt).expect("Failed to generate entropy");
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
