// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec;
use core::fmt;

use crate::codec::Codec;
use crate::error::DecodeError;
use crate::word_array::WordArray;

/// Lowercase hexadecimal, two digits per byte, high nibble first.
///
/// Parsing accepts either case. A trailing unpaired digit is ignored.
#[derive(Debug, Clone, Copy)]
pub struct Hex;

impl Codec for Hex {
    const NAME: &'static str = "hex";

    fn parse(input: &str) -> Result<WordArray, DecodeError> {
        let raw = input.as_bytes();
        let n_bytes = raw.len() / 2;
        let mut words = vec![0u32; n_bytes.div_ceil(4)];

        for i in 0..n_bytes {
            let high = nibble(input, 2 * i)?;
            let low = nibble(input, 2 * i + 1)?;
            words[i >> 2] |= u32::from((high << 4) | low) << (24 - (i % 4) * 8);
        }

        Ok(WordArray::from_words(words, n_bytes))
    }

    fn stringify(words: &WordArray) -> Result<String, DecodeError> {
        let mut out = String::with_capacity(words.sig_bytes() * 2);
        for byte in words.bytes() {
            push_byte(&mut out, byte);
        }

        Ok(out)
    }
}

const DIGITS: &[u8; 16] = b"0123456789abcdef";

fn push_byte(out: &mut String, byte: u8) {
    out.push(char::from(DIGITS[usize::from(byte >> 4)]));
    out.push(char::from(DIGITS[usize::from(byte & 0x0f)]));
}

/// Writes the significant bytes of `words` as lowercase hex.
pub(crate) fn write_hex(words: &WordArray, f: &mut impl fmt::Write) -> fmt::Result {
    for byte in words.bytes() {
        f.write_char(char::from(DIGITS[usize::from(byte >> 4)]))?;
        f.write_char(char::from(DIGITS[usize::from(byte & 0x0f)]))?;
    }

    Ok(())
}

fn nibble(input: &str, position: usize) -> Result<u8, DecodeError> {
    let value = match input.as_bytes()[position] {
        b @ b'0'..=b'9' => b - b'0',
        b @ b'a'..=b'f' => b - b'a' + 10,
        b @ b'A'..=b'F' => b - b'A' + 10,
        _ => {
            return Err(DecodeError::InvalidCharacter {
                codec: Hex::NAME,
                position,
                character: char_at(input, position),
            });
        }
    };

    Ok(value)
}

/// Character that owns byte `position` of `input`.
pub(crate) fn char_at(input: &str, position: usize) -> char {
    input
        .char_indices()
        .take_while(|(start, _)| *start <= position)
        .last()
        .map_or(char::REPLACEMENT_CHARACTER, |(_, c)| c)
}
