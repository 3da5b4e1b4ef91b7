// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104, generic over any [`HashAlgorithm`](wordcrypt_core::HashAlgorithm).
//!
//! ```text
//! HMAC(K, m) = H((K' ⊕ opad) || H((K' ⊕ ipad) || m))
//! ```
//!
//! where `K'` is the key zero-padded to one block, or the digest of the key when it
//! is longer than a block.
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 4231: Identifiers and Test Vectors for HMAC-SHA-224, -256, -384, -512
//!   <https://datatracker.ietf.org/doc/html/rfc4231>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod hmac;

pub use hmac::{Hmac, IPAD, OPAD};
