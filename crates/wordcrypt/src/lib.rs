// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Word-oriented SHA-256, HMAC and text codecs in Rust.</em></p>
//!
//! ---
//!
//! Messages live in a [`WordArray`]: bytes packed big-endian into 32-bit words plus an
//! exact significant-byte count. Hashers consume them through a buffered block engine,
//! HMAC composes two hasher passes, and the codecs in [`enc`] move between
//! `WordArray` and text.
//!
//! # Features
//!
//! - **SHA-256** - FIPS 180-4, incremental or one-shot
//! - **HMAC** - RFC 2104 over any hash algorithm, constant-time verification
//! - **Codecs** - hex, base64, latin1 and UTF-8
//! - **Zeroized buffers** - word storage and hash state are wiped on drop
//! - **`no_std` compatible** - needs only `alloc`
//!
//! # Quick Start
//!
//! ```rust
//! use wordcrypt::enc::{Base64, Codec, Hex};
//! use wordcrypt::{HmacSha256, Sha256Hasher, hmac_sha256, sha256};
//!
//! fn main() -> Result<(), wordcrypt::Error> {
//!     // One-shot
//!     let digest = sha256("abc");
//!     assert_eq!(
//!         digest.to_string(),
//!         "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//!     );
//!
//!     // Incremental
//!     let mut hasher = Sha256Hasher::new();
//!     hasher.update("a")?.update("bc")?;
//!     assert_eq!(hasher.finalize()?, digest);
//!
//!     // Keyed
//!     let key = Hex::parse("0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b")?;
//!     let mut hmac = HmacSha256::new(&key);
//!     let tag = hmac.finalize_with("Hi There")?;
//!     assert_eq!(tag, hmac_sha256("Hi There", &key));
//!
//!     // Any codec
//!     let encoded = tag.to_string_with::<Base64>()?;
//!     assert_eq!(Base64::parse(&encoded)?, tag);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Lifecycle
//!
//! `finalize` is destructive. A finalized hasher (or HMAC) rejects `update` and a
//! second `finalize` with [`LifecycleError`] until `reset` is called:
//!
//! ```rust
//! use wordcrypt::{LifecycleError, Sha256Hasher};
//!
//! let mut hasher = Sha256Hasher::new();
//! hasher.finalize()?;
//! assert_eq!(hasher.update("late").err(), Some(LifecycleError::UpdateAfterFinalize));
//!
//! hasher.reset();
//! hasher.update("fine")?;
//! # Ok::<(), LifecycleError>(())
//! ```
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod enc;

mod error;
mod helpers;

pub use error::Error;
pub use helpers::{hmac_sha256, hmac_sha256_verify, sha256};

pub use wordcrypt_core::{
    BlockFunction, BufferedBlock, DecodeError, HashAlgorithm, Hasher, HasherState, Input,
    LifecycleError, WordArray,
};
pub use wordcrypt_hmac::Hmac;
pub use wordcrypt_rand as rand;
pub use wordcrypt_rand::EntropyError;
pub use wordcrypt_sha256::{Sha256, Sha256Hasher};

/// HMAC over SHA-256.
pub type HmacSha256 = Hmac<Sha256>;
