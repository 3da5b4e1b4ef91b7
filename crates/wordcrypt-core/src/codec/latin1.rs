// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::codec::Codec;
use crate::error::DecodeError;
use crate::word_array::WordArray;

/// ISO-8859-1: each byte is the code point U+0000..=U+00FF.
#[derive(Debug, Clone, Copy)]
pub struct Latin1;

impl Codec for Latin1 {
    const NAME: &'static str = "latin1";

    fn parse(input: &str) -> Result<WordArray, DecodeError> {
        let mut bytes = Vec::with_capacity(input.len());

        for (position, character) in input.char_indices() {
            match u8::try_from(u32::from(character)) {
                Ok(byte) => bytes.push(byte),
                Err(_) => {
                    bytes.zeroize();
                    return Err(DecodeError::NonLatin1 {
                        position,
                        character,
                    });
                }
            }
        }

        let words = WordArray::from_bytes(&bytes);
        bytes.zeroize();

        Ok(words)
    }

    fn stringify(words: &WordArray) -> Result<String, DecodeError> {
        Ok(words.bytes().map(char::from).collect())
    }
}
