// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Incremental block buffering.
//!
//! Bytes are appended to an internal [`WordArray`]; [`BufferedBlock::process`]
//! hands whole blocks (or, when flushing, the partial tail too) to a
//! [`BlockFunction`] in append order and pops them off the front.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::input::Input;
use crate::word_array::WordArray;

/// Per-block hook driven by [`BufferedBlock::process`].
pub trait BlockFunction {
    /// Block size in 32-bit words. Must be non-zero.
    const BLOCK_SIZE: usize;

    /// Number of full blocks kept unprocessed when not flushing.
    const MIN_BUFFER_SIZE: usize = 0;

    /// Consumes the block `words[offset..offset + BLOCK_SIZE]`.
    fn process_block(&mut self, words: &[u32], offset: usize);
}

/// Unprocessed tail of a message plus the running byte count.
#[derive(Clone, Debug, Default, Zeroize, ZeroizeOnDrop)]
pub struct BufferedBlock {
    data: WordArray,
    n_data_bytes: u64,
}

impl BufferedBlock {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            data: WordArray::new(),
            n_data_bytes: 0,
        }
    }

    /// Discards buffered data and resets the byte counter.
    pub fn reset(&mut self) {
        self.data.zeroize();
        self.n_data_bytes = 0;
    }

    /// Appends `input` to the buffer. Text is converted with UTF-8.
    pub fn append<'a>(&mut self, input: impl Into<Input<'a>>) {
        let input = input.into();
        let words = input.to_word_array();

        self.data.concat(&words);
        self.n_data_bytes = self.n_data_bytes.wrapping_add(words.sig_bytes() as u64);
    }

    /// Feeds ready blocks to `function` and removes them from the buffer.
    ///
    /// Without `flush`, `floor(sig_bytes / block_bytes) - MIN_BUFFER_SIZE` blocks
    /// are ready (never negative). With `flush`, `ceil(sig_bytes / block_bytes)`
    /// blocks are ready and the partial tail is zero-padded.
    ///
    /// Returns the removed words; `sig_bytes` of the result is the number of
    /// significant bytes consumed. When no block is ready the buffer is left
    /// untouched and an empty [`WordArray`] is returned.
    pub fn process<F: BlockFunction>(&mut self, function: &mut F, flush: bool) -> WordArray {
        const { assert!(F::BLOCK_SIZE > 0, "BlockFunction::BLOCK_SIZE must be non-zero") };

        let block_size = F::BLOCK_SIZE;
        let block_size_bytes = block_size * 4;
        let sig_bytes = self.data.sig_bytes();

        let n_blocks_ready = if flush {
            sig_bytes.div_ceil(block_size_bytes)
        } else {
            (sig_bytes / block_size_bytes).saturating_sub(F::MIN_BUFFER_SIZE)
        };

        let n_words_ready = n_blocks_ready * block_size;
        let n_bytes_ready = core::cmp::min(n_words_ready * 4, sig_bytes);

        if n_words_ready == 0 {
            return WordArray::new();
        }

        if flush {
            self.data.clamp();
        }
        self.data.reserve_words(n_words_ready);

        for offset in (0..n_words_ready).step_by(block_size) {
            function.process_block(self.data.words(), offset);
        }

        self.data.split_off_front(n_words_ready, n_bytes_ready)
    }

    /// Buffered, not yet processed data.
    pub fn data(&self) -> &WordArray {
        &self.data
    }

    /// Mutable access to the buffered data, for finalize-time padding.
    pub fn data_mut(&mut self) -> &mut WordArray {
        &mut self.data
    }

    /// Total bytes appended since the last reset.
    pub fn n_data_bytes(&self) -> u64 {
        self.n_data_bytes
    }
}
