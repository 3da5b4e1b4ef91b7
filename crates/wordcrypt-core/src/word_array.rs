// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! WordArray - big-endian packed 32-bit word buffer.
//!
//! Byte `i` of the buffer lives in word `i / 4` at bit offset `24 - (i % 4) * 8`.
//! Only the first `sig_bytes` bytes are meaningful; bits past that point in the
//! last word are undefined until [`WordArray::clamp`] runs.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use wordcrypt_rand::{EntropyError, EntropySource, SystemEntropySource};

use crate::codec::{Codec, hex};
use crate::error::DecodeError;

/// Mutable sequence of 32-bit big-endian words with an exact significant-byte count.
///
/// Invariant: `words.len() >= ceil(sig_bytes / 4)`. After [`clamp`](Self::clamp),
/// `words.len() == ceil(sig_bytes / 4)` and the bits past `sig_bytes` are zero.
///
/// Storage is zeroized on drop. `Clone` is a deep copy; two owners never share words.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct WordArray {
    words: Vec<u32>,
    sig_bytes: usize,
}

impl WordArray {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            sig_bytes: 0,
        }
    }

    /// Creates a buffer from raw words and a significant-byte count.
    ///
    /// Missing words are filled with zeros when `sig_bytes` reaches past `words`.
    pub fn from_words(mut words: Vec<u32>, sig_bytes: usize) -> Self {
        let needed = sig_bytes.div_ceil(4);
        if words.len() < needed {
            words.resize(needed, 0);
        }

        Self { words, sig_bytes }
    }

    /// Creates a buffer from a word slice; every byte of every word is significant.
    pub fn from_word_slice(words: &[u32]) -> Self {
        Self::from_words(words.to_vec(), words.len() * 4)
    }

    /// Packs raw bytes big-endian into words.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut words = vec![0u32; bytes.len().div_ceil(4)];

        for (i, byte) in bytes.iter().enumerate() {
            words[i >> 2] |= u32::from(*byte) << (24 - (i % 4) * 8);
        }

        Self {
            words,
            sig_bytes: bytes.len(),
        }
    }

    /// Creates a buffer of `n_bytes` random bytes from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the system entropy source fails.
    pub fn random(n_bytes: usize) -> Result<Self, EntropyError> {
        Self::random_with(&SystemEntropySource {}, n_bytes)
    }

    /// Creates a buffer of `n_bytes` random bytes drawn from `source`.
    ///
    /// # Errors
    ///
    /// Propagates the failure of `source`.
    pub fn random_with<E: EntropySource>(source: &E, n_bytes: usize) -> Result<Self, EntropyError> {
        let mut bytes = vec![0u8; n_bytes];
        let result = source.fill_bytes(&mut bytes).map(|()| Self::from_bytes(&bytes));
        bytes.zeroize();

        result
    }

    /// Backing words, including any insignificant trailing bits.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Mutable access to the backing words.
    pub fn words_mut(&mut self) -> &mut [u32] {
        &mut self.words
    }

    /// Mutable access to word `index`, growing the buffer with zero words as needed.
    ///
    /// `sig_bytes` is left untouched.
    pub fn word_mut(&mut self, index: usize) -> &mut u32 {
        if index >= self.words.len() {
            self.words.resize(index + 1, 0);
        }

        &mut self.words[index]
    }

    /// Number of significant bytes.
    pub fn sig_bytes(&self) -> usize {
        self.sig_bytes
    }

    /// Sets the significant-byte count, growing with zero words when needed.
    ///
    /// Shrinking does not touch the words; call [`clamp`](Self::clamp) to drop them.
    pub fn set_sig_bytes(&mut self, sig_bytes: usize) {
        let needed = sig_bytes.div_ceil(4);
        if self.words.len() < needed {
            self.words.resize(needed, 0);
        }

        self.sig_bytes = sig_bytes;
    }

    /// Same as [`sig_bytes`](Self::sig_bytes).
    pub fn len(&self) -> usize {
        self.sig_bytes
    }

    /// Returns true if there are no significant bytes.
    pub fn is_empty(&self) -> bool {
        self.sig_bytes == 0
    }

    /// Significant byte at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= sig_bytes`.
    pub fn byte(&self, index: usize) -> u8 {
        assert!(
            index < self.sig_bytes,
            "byte index {index} out of range for {} significant bytes",
            self.sig_bytes
        );

        (self.words[index >> 2] >> (24 - (index % 4) * 8)) as u8
    }

    /// Iterates over the significant bytes.
    pub fn bytes(&self) -> impl ExactSizeIterator<Item = u8> + '_ {
        (0..self.sig_bytes).map(|i| self.byte(i))
    }

    /// Copies the significant bytes out.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes().collect()
    }

    /// Zeroes the bits past `sig_bytes` and trims `words` to `ceil(sig_bytes / 4)`.
    ///
    /// Idempotent.
    pub fn clamp(&mut self) {
        let sig_bytes = self.sig_bytes;
        let partial = sig_bytes % 4;

        if partial != 0 {
            self.words[sig_bytes >> 2] &= u32::MAX << (32 - partial * 8);
        }

        let needed = sig_bytes.div_ceil(4);
        if self.words.len() > needed {
            self.words[needed..].zeroize();
            self.words.truncate(needed);
        }
    }

    /// Appends the significant bytes of `other` in place and returns `self`.
    ///
    /// `self` is clamped first. The returned reference aliases the receiver.
    pub fn concat(&mut self, other: &WordArray) -> &mut Self {
        self.clamp();

        let this_sig_bytes = self.sig_bytes;
        let that_sig_bytes = other.sig_bytes;
        self.words
            .resize((this_sig_bytes + that_sig_bytes).div_ceil(4), 0);

        if this_sig_bytes % 4 != 0 {
            // Unaligned tail: one byte at a time
            for i in 0..that_sig_bytes {
                let pos = this_sig_bytes + i;
                self.words[pos >> 2] |= u32::from(other.byte(i)) << (24 - (pos % 4) * 8);
            }
        } else {
            // Aligned tail: one word at a time
            for i in (0..that_sig_bytes).step_by(4) {
                self.words[(this_sig_bytes + i) >> 2] = other.words[i >> 2];
            }
        }

        self.sig_bytes += that_sig_bytes;

        self
    }

    /// Removes the first `n_words` words and `n_bytes` significant bytes.
    ///
    /// Returns the removed words as a new buffer with `n_bytes` significant bytes.
    /// The vacated tail of the backing storage is zeroized.
    pub(crate) fn split_off_front(&mut self, n_words: usize, n_bytes: usize) -> WordArray {
        debug_assert!(n_words <= self.words.len());
        debug_assert!(n_bytes <= self.sig_bytes);

        let front = self.words[..n_words].to_vec();
        let remaining = self.words.len() - n_words;

        self.words.copy_within(n_words.., 0);
        self.words[remaining..].zeroize();
        self.words.truncate(remaining);
        self.sig_bytes -= n_bytes;

        WordArray::from_words(front, n_bytes)
    }

    /// Ensures at least `n_words` backing words exist.
    pub(crate) fn reserve_words(&mut self, n_words: usize) {
        if self.words.len() < n_words {
            self.words.resize(n_words, 0);
        }
    }

    /// Renders the buffer with codec `C`.
    ///
    /// # Errors
    ///
    /// Returns whatever `C::stringify` reports (e.g. invalid UTF-8 for [`crate::Utf8`]).
    pub fn to_string_with<C: Codec>(&self) -> Result<String, DecodeError> {
        C::stringify(self)
    }
}

impl PartialEq for WordArray {
    /// Compares significant bytes only; insignificant trailing bits are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.sig_bytes == other.sig_bytes && self.bytes().eq(other.bytes())
    }
}

impl Eq for WordArray {}

impl fmt::Display for WordArray {
    /// Lowercase hex of the significant bytes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex::write_hex(self, f)
    }
}

impl fmt::Debug for WordArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordArray")
            .field("sig_bytes", &self.sig_bytes)
            .field("hex", &format_args!("{self}"))
            .finish()
    }
}

impl From<&[u8]> for WordArray {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Vec<u32>> for WordArray {
    fn from(words: Vec<u32>) -> Self {
        let sig_bytes = words.len() * 4;
        Self::from_words(words, sig_bytes)
    }
}
