// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use wordcrypt_core::{DecodeError, LifecycleError};
use wordcrypt_rand::EntropyError;

/// Any failure raised by wordcrypt.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Text could not be decoded by a codec.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A hasher or HMAC was used out of order.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    /// The entropy source failed.
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
