// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Toy block functions for exercising the engine without a real digest.

use crate::{BlockFunction, BufferedBlock, HashAlgorithm, WordArray};

/// Records every block it is handed, in order.
#[derive(Debug, Default)]
pub(crate) struct Recorder<const BLOCK: usize, const KEEP: usize> {
    pub(crate) blocks: Vec<Vec<u32>>,
    pub(crate) offsets: Vec<usize>,
}

impl<const BLOCK: usize, const KEEP: usize> BlockFunction for Recorder<BLOCK, KEEP> {
    const BLOCK_SIZE: usize = BLOCK;
    const MIN_BUFFER_SIZE: usize = KEEP;

    fn process_block(&mut self, words: &[u32], offset: usize) {
        self.blocks.push(words[offset..offset + BLOCK].to_vec());
        self.offsets.push(offset);
    }
}

/// Order-sensitive toy digest over 2-word blocks.
///
/// state = rotl(state, 5) ^ word, for every word; finalize flushes the tail and
/// appends the total byte count.
#[derive(Debug, Clone, Default)]
pub(crate) struct RotXor {
    state: u32,
}

impl BlockFunction for RotXor {
    const BLOCK_SIZE: usize = 2;

    fn process_block(&mut self, words: &[u32], offset: usize) {
        for word in &words[offset..offset + Self::BLOCK_SIZE] {
            self.state = self.state.rotate_left(5) ^ word;
        }
    }
}

impl HashAlgorithm for RotXor {
    const NAME: &'static str = "rotxor";
    const OUTPUT_SIZE: usize = 8;

    fn do_reset(&mut self) {
        self.state = 0x0123_4567;
    }

    fn do_finalize(&mut self, buffer: &mut BufferedBlock) -> WordArray {
        let n_data_bytes = buffer.n_data_bytes();
        buffer.process(self, true);

        WordArray::from_word_slice(&[self.state, n_data_bytes as u32])
    }
}

/// [`RotXor`] that advertises the wrong digest size.
#[derive(Debug, Clone, Default)]
pub(crate) struct MisSized {
    inner: RotXor,
}

impl BlockFunction for MisSized {
    const BLOCK_SIZE: usize = RotXor::BLOCK_SIZE;

    fn process_block(&mut self, words: &[u32], offset: usize) {
        self.inner.process_block(words, offset);
    }
}

impl HashAlgorithm for MisSized {
    const NAME: &'static str = "missized";
    const OUTPUT_SIZE: usize = 4;

    fn do_reset(&mut self) {
        self.inner.do_reset();
    }

    fn do_finalize(&mut self, buffer: &mut BufferedBlock) -> WordArray {
        self.inner.do_finalize(buffer)
    }
}
