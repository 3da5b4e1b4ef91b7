// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Text codecs.
//!
//! Each codec is a stateless pair of conversions between text and a
//! [`WordArray`]: `stringify(parse(s)) == s` for any `s` in the codec alphabet,
//! and `parse(stringify(b)) == b` for any buffer `b`.

pub(crate) mod base64;
pub(crate) mod hex;
pub(crate) mod latin1;
pub(crate) mod utf8;

use alloc::string::String;

use crate::error::DecodeError;
use crate::word_array::WordArray;

pub use base64::Base64;
pub use hex::Hex;
pub use latin1::Latin1;
pub use utf8::Utf8;

/// Stateless text <-> buffer conversion.
pub trait Codec {
    /// Short codec name, used in error reports.
    const NAME: &'static str;

    /// Converts text into a buffer.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when `input` contains characters outside the alphabet.
    fn parse(input: &str) -> Result<WordArray, DecodeError>;

    /// Converts the significant bytes of `words` into text.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the bytes have no representation in this codec.
    fn stringify(words: &WordArray) -> Result<String, DecodeError>;
}
