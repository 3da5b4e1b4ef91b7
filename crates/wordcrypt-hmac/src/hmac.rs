// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use wordcrypt_core::{HashAlgorithm, Hasher, Input, LifecycleError, WordArray};

/// Inner pad, one byte repeated across a word.
pub const IPAD: u32 = 0x3636_3636;

/// Outer pad, one byte repeated across a word.
pub const OPAD: u32 = 0x5c5c_5c5c;

/// Keyed hash over algorithm `A`.
///
/// The padded keys are derived once in [`new`](Self::new); [`reset`](Self::reset)
/// only re-primes the wrapped hasher. Both keys are zeroized on drop.
#[derive(Clone)]
pub struct Hmac<A: HashAlgorithm> {
    hasher: Hasher<A>,
    i_key: WordArray,
    o_key: WordArray,
}

impl<A: HashAlgorithm> fmt::Debug for Hmac<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hmac")
            .field("algorithm", &A::NAME)
            .field("state", &self.hasher.state())
            .finish_non_exhaustive()
    }
}

impl<A: HashAlgorithm> Hmac<A> {
    /// Derives the inner and outer pad keys from `key` and primes the hasher.
    ///
    /// Keys longer than one block are replaced by their digest first. Text keys
    /// are UTF-8 encoded.
    pub fn new<'a>(key: impl Into<Input<'a>>) -> Self {
        let (i_key, o_key) = derive_pad_keys::<A>(key.into());

        let mut hmac = Self {
            hasher: Hasher::new(),
            i_key,
            o_key,
        };
        hmac.reset();

        hmac
    }

    /// One-shot tag of `message` under `key`.
    pub fn mac<'k, 'm>(key: impl Into<Input<'k>>, message: impl Into<Input<'m>>) -> WordArray {
        let (mut inner, mut outer) = derive_pad_keys::<A>(key.into());

        inner.concat(&message.into().to_word_array());
        outer.concat(&Hasher::<A>::digest(&inner));

        Hasher::<A>::digest(&outer)
    }

    /// One-shot constant-time check of `tag` against the tag of `message` under `key`.
    pub fn verify_mac<'k, 'm>(
        key: impl Into<Input<'k>>,
        message: impl Into<Input<'m>>,
        tag: &[u8],
    ) -> bool {
        tag_matches(&Self::mac(key, message), tag)
    }

    /// Restarts with the same key.
    pub fn reset(&mut self) {
        self.hasher.reset_with(&self.i_key);
    }

    /// Absorbs message data.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::UpdateAfterFinalize`] once the tag has been produced.
    pub fn update<'a>(&mut self, message: impl Into<Input<'a>>) -> Result<&mut Self, LifecycleError> {
        self.hasher.update(message)?;

        Ok(self)
    }

    /// Produces the tag. Call [`reset`](Self::reset) before reuse.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::AlreadyFinalized`] on a second call without `reset`.
    pub fn finalize(&mut self) -> Result<WordArray, LifecycleError> {
        self.finalize_inner(None)
    }

    /// Absorbs a last `message`, then produces the tag.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::AlreadyFinalized`] on a second call without `reset`.
    pub fn finalize_with<'a>(
        &mut self,
        message: impl Into<Input<'a>>,
    ) -> Result<WordArray, LifecycleError> {
        self.finalize_inner(Some(message.into()))
    }

    /// Finalizes with `message` and compares the tag against `tag` in constant time.
    ///
    /// A `tag` of the wrong length never matches.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::AlreadyFinalized`] on a second call without `reset`.
    pub fn verify<'a>(
        &mut self,
        message: impl Into<Input<'a>>,
        tag: &[u8],
    ) -> Result<bool, LifecycleError> {
        let computed = self.finalize_with(message)?;

        Ok(tag_matches(&computed, tag))
    }

    fn finalize_inner(&mut self, message: Option<Input<'_>>) -> Result<WordArray, LifecycleError> {
        let inner = match message {
            Some(message) => self.hasher.finalize_with(message)?,
            None => self.hasher.finalize()?,
        };

        let mut outer = self.o_key.clone();
        outer.concat(&inner);

        self.hasher.reset();
        self.hasher.finalize_with(&outer)
    }
}

fn tag_matches(computed: &WordArray, tag: &[u8]) -> bool {
    let computed = Zeroizing::new(computed.to_bytes());

    computed.as_slice().ct_eq(tag).into()
}

/// Returns `(K' ^ ipad, K' ^ opad)`, each exactly one block long.
fn derive_pad_keys<A: HashAlgorithm>(key: Input<'_>) -> (WordArray, WordArray) {
    let block_size_bytes = A::BLOCK_SIZE * 4;

    let mut key = key.into_word_array();
    if key.sig_bytes() > block_size_bytes {
        tracing::trace!(
            algorithm = A::NAME,
            key_len = key.sig_bytes(),
            "compressing over-long HMAC key"
        );
        key = Hasher::<A>::digest(&key);
    }
    key.clamp();

    let mut o_key = key.clone();
    let mut i_key = key;
    o_key.set_sig_bytes(block_size_bytes);
    i_key.set_sig_bytes(block_size_bytes);

    for (o, i) in o_key.words_mut().iter_mut().zip(i_key.words_mut().iter_mut()) {
        *o ^= OPAD;
        *i ^= IPAD;
    }

    (i_key, o_key)
}
