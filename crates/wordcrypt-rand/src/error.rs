// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// No random bytes could be produced for a buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// The OS random source refused or failed the request.
    #[error("os entropy source unavailable")]
    EntropyNotAvailable,
}
