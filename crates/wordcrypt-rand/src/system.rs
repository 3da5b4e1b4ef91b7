// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;
use zeroize::Zeroize;

use crate::{EntropySource, error::EntropyError};

/// OS CSPRNG, the source used by `WordArray::random`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEntropySource {}

impl SystemEntropySource {
    /// Runs `fill` over `dest`. On failure the OS error code is logged and
    /// whatever `fill` managed to write is wiped.
    pub(crate) fn fill_with(
        fill: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
        dest: &mut [u8],
    ) -> Result<(), EntropyError> {
        if let Err(err) = fill(dest) {
            tracing::warn!(len = dest.len(), code = err.raw_os_error(), "system entropy source failed");
            dest.zeroize();

            return Err(EntropyError::EntropyNotAvailable);
        }

        Ok(())
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_with(&getrandom::fill, dest)
    }
}
