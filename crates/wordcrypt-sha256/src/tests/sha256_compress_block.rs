// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Single-block compression against FIPS 180-4 "abc" example (Appendix B.1)

use wordcrypt_core::{BlockFunction, BufferedBlock, HashAlgorithm};

use crate::Sha256;
use crate::consts::H0;

fn abc_padded_block() -> [u32; 16] {
    let mut block = [0u32; 16];
    block[0] = 0x6162_6380;
    block[15] = 0x0000_0018;

    block
}

const ABC_DIGEST: [u32; 8] = [
    0xba78_16bf, 0x8f01_cfea, 0x4141_40de, 0x5dae_2223, 0xb003_61a3, 0x9617_7a9c, 0xb410_ff61,
    0xf200_15ad,
];

#[test]
fn test_default_state_is_h0() {
    assert_eq!(Sha256::default().state(), H0);
}

#[test]
fn test_compress_abc_block() {
    let mut sha = Sha256::default();
    sha.process_block(&abc_padded_block(), 0);

    assert_eq!(sha.state(), ABC_DIGEST);
}

#[test]
fn test_compress_honours_offset() {
    let mut words = [0xdead_beefu32; 32];
    words[16..].copy_from_slice(&abc_padded_block());

    let mut sha = Sha256::default();
    sha.process_block(&words, 16);

    assert_eq!(sha.state(), ABC_DIGEST);
}

#[test]
fn test_compress_wipes_round_scratch() {
    let mut sha = Sha256::default();
    sha.process_block(&abc_padded_block(), 0);

    assert!(sha.is_scratch_zeroized());
    assert_eq!(sha.state(), ABC_DIGEST);
}

#[test]
fn test_finalize_leaves_no_round_scratch() {
    let mut sha = Sha256::default();
    let mut buffer = BufferedBlock::new();
    buffer.append(&[0x5au8; 150]);
    buffer.process(&mut sha, false);

    let digest = sha.do_finalize(&mut buffer);

    assert_eq!(digest.sig_bytes(), 32);
    assert!(sha.is_scratch_zeroized());
}

#[test]
fn test_do_reset_restores_h0() {
    let mut sha = Sha256::default();
    sha.process_block(&abc_padded_block(), 0);
    assert_ne!(sha.state(), H0);

    sha.do_reset();
    assert_eq!(sha.state(), H0);
}

#[test]
fn test_block_geometry() {
    assert_eq!(<Sha256 as BlockFunction>::BLOCK_SIZE, 16);
    assert_eq!(<Sha256 as BlockFunction>::MIN_BUFFER_SIZE, 0);
    assert_eq!(<Sha256 as HashAlgorithm>::OUTPUT_SIZE, 32);
    assert_eq!(<Sha256 as HashAlgorithm>::NAME, "SHA-256");
}
