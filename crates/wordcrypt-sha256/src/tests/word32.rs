// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::word32::{bsig0, bsig1, ch, maj, ssig0, ssig1};

const TEST_VALUES: [u32; 5] = [
    0x0000_0000,
    0xFFFF_FFFF,
    0x0123_4567,
    0xFEDC_BA98,
    0x0F0F_0F0F,
];

#[test]
fn ch_matches_reference() {
    // Ch picks y where x is set, z elsewhere
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                let mut expected = 0u32;
                for bit in 0..32 {
                    let source = if (x >> bit) & 1 == 1 { y } else { z };
                    expected |= source & (1 << bit);
                }

                assert_eq!(
                    ch(x, y, z),
                    expected,
                    "Ch mismatch for x={x:#010x}, y={y:#010x}, z={z:#010x}"
                );
            }
        }
    }
}

#[test]
fn maj_matches_reference() {
    // Maj(x, y, z) = (x & y) ^ (x & z) ^ (y & z)
    for &x in &TEST_VALUES {
        for &y in &TEST_VALUES {
            for &z in &TEST_VALUES {
                let expected = (x & y) ^ (x & z) ^ (y & z);

                assert_eq!(
                    maj(x, y, z),
                    expected,
                    "Maj mismatch for x={x:#010x}, y={y:#010x}, z={z:#010x}"
                );
            }
        }
    }
}

fn rotr(x: u32, n: u32) -> u32 {
    (x >> n) | (x << (32 - n))
}

#[test]
fn sigma_functions_match_reference() {
    for &x in &TEST_VALUES {
        assert_eq!(bsig0(x), rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22), "Σ0({x:#010x})");
        assert_eq!(bsig1(x), rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25), "Σ1({x:#010x})");
        assert_eq!(ssig0(x), rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3), "σ0({x:#010x})");
        assert_eq!(ssig1(x), rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10), "σ1({x:#010x})");
    }
}

#[test]
fn small_sigmas_shift_in_zeros() {
    // SHR drops the top bits, unlike ROTR
    assert_eq!(ssig0(0x0000_0001), 0x0200_4000);
    assert_eq!(ssig1(0x0000_0001), 0x0000_8000 ^ 0x0000_2000);
}
