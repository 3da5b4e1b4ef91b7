// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 compression and padding per RFC 6234 Section 6.2

use alloc::vec::Vec;
use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use wordcrypt_core::{BlockFunction, BufferedBlock, HashAlgorithm, WordArray};

use crate::consts::{BLOCK_WORDS, H0, HASH_LEN, K256};
use crate::word32::{bsig0, bsig1, ch, maj, ssig0, ssig1};

/// SHA-256 running state.
///
/// The message schedule, working variables and round temporaries live in the
/// struct so they are wiped after every block and with the state.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha256 {
    // Hash state H(i) per RFC 6234 Section 6.2.1
    h: [u32; 8],

    // Message schedule W[0..63]
    w: [u32; 64],

    // Working variables a..h per RFC 6234 Section 6.2.2
    wv: [u32; 8],

    // Temporaries
    t1: u32,
    t2: u32,
}

impl Default for Sha256 {
    fn default() -> Self {
        Self {
            h: H0,
            w: [0; 64],
            wv: [0; 8],
            t1: 0,
            t2: 0,
        }
    }
}

impl fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha256").finish_non_exhaustive()
    }
}

impl Sha256 {
    /// Current intermediate hash value H(i).
    pub fn state(&self) -> [u32; 8] {
        self.h
    }

    /// True when schedule, working variables and temporaries are all zero.
    #[cfg(test)]
    pub(crate) fn is_scratch_zeroized(&self) -> bool {
        self.w.iter().chain(self.wv.iter()).all(|&word| word == 0) && self.t1 == 0 && self.t2 == 0
    }

    /// Compression per RFC 6234 Section 6.2.2
    fn compress(&mut self, block: &[u32]) {
        // W[0..15] straight from the block; words are already big-endian packed
        self.w[..BLOCK_WORDS].copy_from_slice(block);

        // W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
        for t in BLOCK_WORDS..64 {
            self.w[t] = ssig1(self.w[t - 2])
                .wrapping_add(self.w[t - 7])
                .wrapping_add(ssig0(self.w[t - 15]))
                .wrapping_add(self.w[t - 16]);
        }

        self.wv = self.h;

        for (k, wt) in K256.iter().zip(self.w.iter_mut()) {
            // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
            self.t1 = self.wv[7]
                .wrapping_add(bsig1(self.wv[4]))
                .wrapping_add(ch(self.wv[4], self.wv[5], self.wv[6]))
                .wrapping_add(*k)
                .wrapping_add(*wt);

            // W[t] no longer needed
            *wt = 0;

            // T2 = Σ0(a) + Maj(a,b,c)
            self.t2 = bsig0(self.wv[0]).wrapping_add(maj(self.wv[0], self.wv[1], self.wv[2]));

            // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
            self.wv.copy_within(0..7, 1);
            self.wv[4] = self.wv[4].wrapping_add(self.t1);
            self.wv[0] = self.t1.wrapping_add(self.t2);
        }

        for (h, v) in self.h.iter_mut().zip(self.wv.iter()) {
            *h = h.wrapping_add(*v);
        }

        self.wv.zeroize();
        self.t1.zeroize();
        self.t2.zeroize();
    }
}

impl BlockFunction for Sha256 {
    const BLOCK_SIZE: usize = BLOCK_WORDS;

    fn process_block(&mut self, words: &[u32], offset: usize) {
        self.compress(&words[offset..offset + BLOCK_WORDS]);
    }
}

impl HashAlgorithm for Sha256 {
    const NAME: &'static str = "SHA-256";
    const OUTPUT_SIZE: usize = HASH_LEN;

    fn do_reset(&mut self) {
        self.zeroize();
        self.h = H0;
    }

    /// Padding per RFC 6234 Section 4.1: a single 1 bit, zeros, then the
    /// 64-bit message length, so the total is a multiple of 512 bits.
    fn do_finalize(&mut self, buffer: &mut BufferedBlock) -> WordArray {
        let n_bits_total = buffer.n_data_bytes().wrapping_mul(8);

        let data = buffer.data_mut();
        data.clamp();

        let n_bits_left = data.sig_bytes() * 8;
        *data.word_mut(n_bits_left >> 5) |= 0x80 << (24 - n_bits_left % 32);

        // Length goes in the last two words of the block that fits it
        let length_index = (((n_bits_left + 64) >> 9) << 4) + 14;
        *data.word_mut(length_index) = (n_bits_total >> 32) as u32;
        *data.word_mut(length_index + 1) = n_bits_total as u32;

        let n_words = data.words().len();
        data.set_sig_bytes(n_words * 4);

        buffer.process(self, true);

        let digest: Vec<u32> = self.h.to_vec();
        WordArray::from_words(digest, HASH_LEN)
    }
}
