// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Text codecs.
//!
//! Every codec maps a [`WordArray`](crate::WordArray) to a string and back through
//! the [`Codec`] trait. `Display` on `WordArray` uses [`Hex`].

pub use wordcrypt_core::{Base64, Codec, Hex, Latin1, Utf8};
