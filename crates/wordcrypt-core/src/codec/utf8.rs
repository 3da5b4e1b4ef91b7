// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use crate::codec::Codec;
use crate::error::DecodeError;
use crate::word_array::WordArray;

/// UTF-8 text.
///
/// Parsing never fails since `&str` is already valid UTF-8.
#[derive(Debug, Clone, Copy)]
pub struct Utf8;

impl Utf8 {
    /// Infallible form of [`Codec::parse`].
    pub fn encode(input: &str) -> WordArray {
        WordArray::from_bytes(input.as_bytes())
    }
}

impl Codec for Utf8 {
    const NAME: &'static str = "utf8";

    fn parse(input: &str) -> Result<WordArray, DecodeError> {
        Ok(Self::encode(input))
    }

    fn stringify(words: &WordArray) -> Result<String, DecodeError> {
        String::from_utf8(words.to_bytes()).map_err(|err| {
            let valid_up_to = err.utf8_error().valid_up_to();
            let mut bytes = err.into_bytes();
            zeroize::Zeroize::zeroize(&mut bytes);

            DecodeError::InvalidUtf8 { valid_up_to }
        })
    }
}
