// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 per FIPS 180-4 / RFC 6234 Section 6.2
//!
//! [`Sha256`] plugs into the generic [`wordcrypt_core::Hasher`] engine; use the
//! [`Sha256Hasher`] alias for incremental hashing.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>
//!
//! ## Example
//!
//! ```rust
//! use wordcrypt_sha256::Sha256Hasher;
//!
//! let mut hasher = Sha256Hasher::new();
//! hasher.update("a").expect("fresh hasher");
//! hasher.update("bc").expect("fresh hasher");
//! let digest = hasher.finalize().expect("first finalize");
//!
//! assert_eq!(
//!     digest.to_string(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod sha256;
mod word32;

pub use consts::{BLOCK_LEN, BLOCK_WORDS, HASH_LEN};
pub use sha256::Sha256;

/// Incremental SHA-256.
pub type Sha256Hasher = wordcrypt_core::Hasher<Sha256>;
