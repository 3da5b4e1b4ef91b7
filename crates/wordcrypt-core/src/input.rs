// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::codec::Utf8;
use crate::word_array::WordArray;

/// Message or key material accepted by hashers and HMAC.
///
/// Text is converted with UTF-8; raw bytes are packed big-endian.
#[derive(Debug, Clone, Copy)]
pub enum Input<'a> {
    /// UTF-8 text.
    Text(&'a str),
    /// Raw bytes.
    Bytes(&'a [u8]),
    /// An existing buffer, used as is.
    Words(&'a WordArray),
}

impl<'a> Input<'a> {
    /// Borrows `Words` inputs, converts the others.
    pub fn to_word_array(&self) -> Cow<'a, WordArray> {
        match *self {
            Input::Text(text) => Cow::Owned(Utf8::encode(text)),
            Input::Bytes(bytes) => Cow::Owned(WordArray::from_bytes(bytes)),
            Input::Words(words) => Cow::Borrowed(words),
        }
    }

    /// Owned buffer holding this input.
    pub fn into_word_array(self) -> WordArray {
        self.to_word_array().into_owned()
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Text(text.as_str())
    }
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Input::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Input::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a WordArray> for Input<'a> {
    fn from(words: &'a WordArray) -> Self {
        Input::Words(words)
    }
}
