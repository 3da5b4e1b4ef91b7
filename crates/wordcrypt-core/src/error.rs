// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for wordcrypt-core.
use thiserror::Error;

/// Errors produced while converting between text and [`crate::WordArray`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A character outside the codec alphabet.
    #[error("invalid {codec} character {character:?} at byte {position}")]
    InvalidCharacter {
        /// Codec that rejected the input.
        codec: &'static str,
        /// Byte offset of the offending character in the input.
        position: usize,
        /// The offending character.
        character: char,
    },

    /// A code point above U+00FF handed to the Latin1 codec.
    #[error("character {character:?} at byte {position} is not representable in Latin1")]
    NonLatin1 {
        /// Byte offset of the offending character in the input.
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The significant bytes of a buffer are not valid UTF-8.
    #[error("invalid utf-8 sequence after {valid_up_to} bytes")]
    InvalidUtf8 {
        /// Number of leading bytes that form valid UTF-8.
        valid_up_to: usize,
    },
}

/// Misuse of the Fresh -> Accumulating -> Finalized digest lifecycle.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleError {
    /// `update` was called on a finalized digest without an intervening `reset`.
    #[error("update called after finalize; call reset first")]
    UpdateAfterFinalize,

    /// `finalize` was called twice without an intervening `reset`.
    #[error("digest already finalized; call reset first")]
    AlreadyFinalized,
}
