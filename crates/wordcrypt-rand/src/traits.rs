// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Byte source behind `WordArray::random_with`.
///
/// Buffers drawn from it become HMAC keys and salts, so only cryptographically
/// secure generators may implement it.
pub trait EntropySource {
    /// Overwrites all of `dest` with random bytes.
    ///
    /// # Errors
    ///
    /// [`EntropyError::EntropyNotAvailable`] when the source produced nothing usable.
    /// `dest` is left zeroed in that case.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}
