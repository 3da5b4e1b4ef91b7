// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// RFC 4231 Section 4 test vectors, HMAC-SHA-256 outputs
//
// Reference: https://datatracker.ietf.org/doc/html/rfc4231#section-4

use wordcrypt_core::{Codec, Hex};
use wordcrypt_sha256::Sha256;

use crate::Hmac;

type HmacSha256 = Hmac<Sha256>;

fn mac_hex(key: &[u8], data: &[u8]) -> String {
    HmacSha256::new(key)
        .finalize_with(data)
        .expect("Failed to finalize")
        .to_string()
}

#[test]
fn test_case_1() {
    let key = [0x0bu8; 20];

    assert_eq!(
        mac_hex(&key, b"Hi There"),
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7"
    );
}

#[test]
fn test_case_2_short_key() {
    assert_eq!(
        mac_hex(b"Jefe", b"what do ya want for nothing?"),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

#[test]
fn test_case_2_text_key() {
    let mut hmac = HmacSha256::new("Jefe");
    hmac.update("what do ya want for nothing?")
        .expect("Failed to update");

    assert_eq!(
        hmac.finalize().expect("Failed to finalize").to_string(),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

#[test]
fn test_case_3() {
    let key = [0xaau8; 20];
    let data = [0xddu8; 50];

    assert_eq!(
        mac_hex(&key, &data),
        "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe"
    );
}

#[test]
fn test_case_4() {
    let key = Hex::parse("0102030405060708090a0b0c0d0e0f10111213141516171819")
        .expect("Failed to parse key");
    let data = [0xcdu8; 50];

    let mac = HmacSha256::new(&key)
        .finalize_with(&data)
        .expect("Failed to finalize");

    assert_eq!(
        mac.to_string(),
        "82558a389a443c0ea4cc819899f2083a85f0faa3e578f8077a2e3ff46729665b"
    );
}

#[test]
fn test_case_5_truncated() {
    let key = [0x0cu8; 20];
    let mac = mac_hex(&key, b"Test With Truncation");

    assert_eq!(&mac[..32], "a3b6167473100ee06e0c796c2955552b");
}

#[test]
fn test_case_6_large_key() {
    let key = [0xaau8; 131];

    assert_eq!(
        mac_hex(&key, b"Test Using Larger Than Block-Size Key - Hash Key First"),
        "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54"
    );
}

#[test]
fn test_case_7_large_key_and_data() {
    let key = [0xaau8; 131];
    let data = b"This is a test using a larger than block-size key and a larger than block-size data. The key needs to be hashed before being used by the HMAC algorithm.";

    assert_eq!(
        mac_hex(&key, data),
        "9b09ffa71b942fcb27635fbcd5b0e944bfdc63644f0713938a7f51535c3a35e2"
    );
}
