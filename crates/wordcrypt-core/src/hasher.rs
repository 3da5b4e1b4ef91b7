// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Digest engine.
//!
//! [`Hasher`] drives a [`HashAlgorithm`] through a [`BufferedBlock`]:
//!
//! ```text
//! Fresh --update--> Accumulating --finalize--> Finalized
//!   ^                                              |
//!   +-------------------- reset -------------------+
//! ```
//!
//! `update` after `finalize`, or a second `finalize`, is rejected with
//! [`LifecycleError`] until `reset` is called.

use crate::buffered_block::{BlockFunction, BufferedBlock};
use crate::error::LifecycleError;
use crate::input::Input;
use crate::word_array::WordArray;

/// Concrete digest algorithm plugged into [`Hasher`].
pub trait HashAlgorithm: BlockFunction + Clone + Default {
    /// Algorithm name, for diagnostics.
    const NAME: &'static str;

    /// Digest size in bytes.
    const OUTPUT_SIZE: usize;

    /// Re-primes the running state with the initial constants.
    fn do_reset(&mut self);

    /// Pads `buffer`, drains it through [`BufferedBlock::process`] and returns
    /// the digest as a new buffer.
    fn do_finalize(&mut self, buffer: &mut BufferedBlock) -> WordArray;
}

/// Position of a [`Hasher`] in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasherState {
    /// Reset, no data yet.
    Fresh,
    /// At least one update since the last reset.
    Accumulating,
    /// Finalized; only `reset` is accepted.
    Finalized,
}

/// Incremental digest over algorithm `A`.
///
/// `Clone` copies the buffered tail and running state, so a common prefix can be
/// hashed once and then forked.
#[derive(Debug, Clone)]
pub struct Hasher<A: HashAlgorithm> {
    buffer: BufferedBlock,
    algorithm: A,
    state: HasherState,
}

impl<A: HashAlgorithm> Default for Hasher<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: HashAlgorithm> Hasher<A> {
    /// Creates a hasher in the `Fresh` state.
    pub fn new() -> Self {
        let mut hasher = Self {
            buffer: BufferedBlock::new(),
            algorithm: A::default(),
            state: HasherState::Fresh,
        };
        hasher.reset();

        hasher
    }

    /// One-shot digest of `message`.
    pub fn digest<'a>(message: impl Into<Input<'a>>) -> WordArray {
        let mut hasher = Self::new();
        hasher.buffer.append(message);

        let digest = hasher.algorithm.do_finalize(&mut hasher.buffer);
        debug_assert_output_size::<A>(&digest);

        digest
    }

    /// Returns to the `Fresh` state with the initial constants.
    pub fn reset(&mut self) {
        self.buffer.reset();
        self.algorithm.do_reset();
        self.state = HasherState::Fresh;
    }

    /// Resets, then absorbs `preamble` (e.g. an HMAC inner pad).
    pub fn reset_with<'a>(&mut self, preamble: impl Into<Input<'a>>) -> &mut Self {
        self.reset();
        self.absorb(preamble.into());

        self
    }

    /// Appends `message` and compresses every complete block.
    ///
    /// The returned reference aliases `self`; it exists for chaining.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::UpdateAfterFinalize`] if the hasher is finalized.
    pub fn update<'a>(&mut self, message: impl Into<Input<'a>>) -> Result<&mut Self, LifecycleError> {
        if self.state == HasherState::Finalized {
            tracing::debug!(algorithm = A::NAME, "rejected update on finalized hasher");
            return Err(LifecycleError::UpdateAfterFinalize);
        }

        self.absorb(message.into());

        Ok(self)
    }

    /// Pads, drains and returns the digest.
    ///
    /// Destructive: the hasher is `Finalized` afterwards.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::AlreadyFinalized`] if called twice without `reset`.
    pub fn finalize(&mut self) -> Result<WordArray, LifecycleError> {
        self.finalize_inner(None)
    }

    /// Appends a last `message`, then finalizes.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::AlreadyFinalized`] if called twice without `reset`.
    pub fn finalize_with<'a>(
        &mut self,
        message: impl Into<Input<'a>>,
    ) -> Result<WordArray, LifecycleError> {
        self.finalize_inner(Some(message.into()))
    }

    /// Current lifecycle state.
    pub fn state(&self) -> HasherState {
        self.state
    }

    /// Total bytes absorbed since the last reset.
    pub fn n_data_bytes(&self) -> u64 {
        self.buffer.n_data_bytes()
    }

    fn absorb(&mut self, message: Input<'_>) {
        self.buffer.append(message);
        self.buffer.process(&mut self.algorithm, false);
        self.state = HasherState::Accumulating;
    }

    fn finalize_inner(&mut self, message: Option<Input<'_>>) -> Result<WordArray, LifecycleError> {
        if self.state == HasherState::Finalized {
            tracing::debug!(algorithm = A::NAME, "rejected second finalize");
            return Err(LifecycleError::AlreadyFinalized);
        }

        if let Some(message) = message {
            self.buffer.append(message);
        }

        let digest = self.algorithm.do_finalize(&mut self.buffer);
        debug_assert_output_size::<A>(&digest);
        self.state = HasherState::Finalized;

        Ok(digest)
    }
}

fn debug_assert_output_size<A: HashAlgorithm>(digest: &WordArray) {
    debug_assert_eq!(
        digest.sig_bytes(),
        A::OUTPUT_SIZE,
        "{} produced a digest of the wrong size",
        A::NAME
    );
}
