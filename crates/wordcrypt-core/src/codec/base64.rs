// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::codec::Codec;
use crate::codec::hex::char_at;
use crate::error::DecodeError;
use crate::word_array::WordArray;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const PADDING: u8 = b'=';

/// Standard base64 (RFC 4648 alphabet) with `=` padding.
///
/// Parsing stops at the first `=`; everything after it is ignored.
#[derive(Debug, Clone, Copy)]
pub struct Base64;

impl Codec for Base64 {
    const NAME: &'static str = "base64";

    fn parse(input: &str) -> Result<WordArray, DecodeError> {
        let raw = input.as_bytes();
        let len = raw.iter().position(|&b| b == PADDING).unwrap_or(raw.len());

        let mut sextets = Vec::with_capacity(len);
        for (position, &b) in raw[..len].iter().enumerate() {
            let value = decode_sextet(b).ok_or_else(|| DecodeError::InvalidCharacter {
                codec: Self::NAME,
                position,
                character: char_at(input, position),
            })?;
            sextets.push(value);
        }

        // Every character after the first of a quartet closes one byte.
        let mut bytes = Vec::with_capacity(len * 3 / 4);
        for i in 1..len {
            let shift = (i % 4) * 2;
            if shift == 0 {
                continue;
            }

            let high = u32::from(sextets[i - 1]) << shift;
            let low = u32::from(sextets[i]) >> (6 - shift);
            bytes.push(((high | low) & 0xff) as u8);
        }

        let words = WordArray::from_bytes(&bytes);
        sextets.zeroize();
        bytes.zeroize();

        Ok(words)
    }

    fn stringify(words: &WordArray) -> Result<String, DecodeError> {
        let sig_bytes = words.sig_bytes();
        let mut out = String::with_capacity(sig_bytes.div_ceil(3) * 4);

        for i in (0..sig_bytes).step_by(3) {
            let byte_at = |j: usize| if j < sig_bytes { u32::from(words.byte(j)) } else { 0 };
            let triplet = (byte_at(i) << 16) | (byte_at(i + 1) << 8) | byte_at(i + 2);

            // 1 byte -> 2 chars, 2 bytes -> 3 chars, 3 bytes -> 4 chars
            let n_chars = (sig_bytes - i).min(3) + 1;
            for j in 0..n_chars {
                let sextet = (triplet >> (6 * (3 - j))) & 0x3f;
                out.push(char::from(ALPHABET[sextet as usize]));
            }
        }

        while out.len() % 4 != 0 {
            out.push(char::from(PADDING));
        }

        Ok(out)
    }
}

fn decode_sextet(b: u8) -> Option<u8> {
    match b {
        b'A'..=b'Z' => Some(b - b'A'),
        b'a'..=b'z' => Some(b - b'a' + 26),
        b'0'..=b'9' => Some(b - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}
