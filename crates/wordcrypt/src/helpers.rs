// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use wordcrypt_core::{Hasher, Input, WordArray};
use wordcrypt_sha256::Sha256;

use crate::HmacSha256;

/// SHA-256 of `message`.
///
/// ```rust
/// assert_eq!(
///     wordcrypt::sha256("").to_string(),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn sha256<'a>(message: impl Into<Input<'a>>) -> WordArray {
    Hasher::<Sha256>::digest(message)
}

/// HMAC-SHA256 of `message` under `key`.
pub fn hmac_sha256<'m, 'k>(
    message: impl Into<Input<'m>>,
    key: impl Into<Input<'k>>,
) -> WordArray {
    HmacSha256::mac(key, message)
}

/// Checks `tag` against HMAC-SHA256 of `message` under `key` in constant time.
pub fn hmac_sha256_verify<'m, 'k>(
    message: impl Into<Input<'m>>,
    key: impl Into<Input<'k>>,
    tag: &[u8],
) -> bool {
    HmacSha256::verify_mac(key, message, tag)
}
