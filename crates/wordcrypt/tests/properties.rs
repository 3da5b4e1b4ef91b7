// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use wordcrypt::enc::{Base64, Codec, Hex, Latin1};
use wordcrypt::{HmacSha256, Sha256Hasher, WordArray, hmac_sha256, sha256};

fn word_array() -> impl Strategy<Value = WordArray> {
    // Random words with a sig_bytes that may leave garbage in the last word
    proptest::collection::vec(any::<u32>(), 0..12).prop_flat_map(|words| {
        let max = words.len() * 4;
        (Just(words), 0..=max).prop_map(|(words, sig_bytes)| WordArray::from_words(words, sig_bytes))
    })
}

fn clamped(mut words: WordArray) -> WordArray {
    words.clamp();
    words
}

proptest! {
    #[test]
    fn prop_hex_round_trip(words in word_array()) {
        let text = Hex::stringify(&words).expect("Failed to stringify");
        let parsed = Hex::parse(&text).expect("Failed to parse");

        let expected = clamped(words);
        prop_assert_eq!(parsed.words(), expected.words());
    }

    #[test]
    fn prop_base64_round_trip(words in word_array()) {
        let text = Base64::stringify(&words).expect("Failed to stringify");
        let parsed = Base64::parse(&text).expect("Failed to parse");

        let expected = clamped(words);
        prop_assert_eq!(parsed.words(), expected.words());
    }

    #[test]
    fn prop_latin1_round_trip(words in word_array()) {
        let text = Latin1::stringify(&words).expect("Failed to stringify");
        let parsed = Latin1::parse(&text).expect("Failed to parse");

        let expected = clamped(words);
        prop_assert_eq!(parsed.words(), expected.words());
    }

    #[test]
    fn prop_every_split_point_gives_same_digest(
        message in proptest::collection::vec(any::<u8>(), 0..150),
    ) {
        let expected = sha256(&message);

        for cut in 0..=message.len() {
            let mut hasher = Sha256Hasher::new();
            hasher.update(&message[..cut]).expect("Failed to update");
            let digest = hasher.finalize_with(&message[cut..]).expect("Failed to finalize");

            prop_assert_eq!(&digest, &expected, "split at {}", cut);
        }
    }

    #[test]
    fn prop_clamp_is_idempotent(words in word_array()) {
        let once = clamped(words);
        let twice = clamped(once.clone());

        prop_assert_eq!(once.words(), twice.words());
        prop_assert_eq!(once.sig_bytes(), twice.sig_bytes());
    }

    #[test]
    fn prop_clone_is_independent(a in word_array(), b in word_array()) {
        let words_before = a.words().to_vec();
        let sig_bytes_before = a.sig_bytes();

        let mut copy = a.clone();
        copy.concat(&b);

        prop_assert_eq!(a.words(), words_before.as_slice());
        prop_assert_eq!(a.sig_bytes(), sig_bytes_before);
    }

    #[test]
    fn prop_concat_is_associative(a in word_array(), b in word_array(), c in word_array()) {
        let mut left = a.clone();
        left.concat(&b).concat(&c);

        let mut bc = b.clone();
        bc.concat(&c);
        let mut right = a.clone();
        right.concat(&bc);

        prop_assert_eq!(left.to_bytes(), right.to_bytes());
    }

    #[test]
    fn prop_hmac_long_key_is_compressed(
        key in proptest::collection::vec(any::<u8>(), 65..160),
        message in proptest::collection::vec(any::<u8>(), 0..80),
    ) {
        prop_assert_eq!(
            hmac_sha256(&message, &key),
            hmac_sha256(&message, &sha256(&key))
        );
    }

    #[test]
    fn prop_hmac_reset_is_reproducible(
        key in proptest::collection::vec(any::<u8>(), 0..100),
        message in proptest::collection::vec(any::<u8>(), 0..100),
    ) {
        let mut hmac = HmacSha256::new(&key);
        let first = hmac.finalize_with(&message).expect("Failed to finalize");
        hmac.reset();
        let second = hmac.finalize_with(&message).expect("Failed to finalize");

        prop_assert_eq!(first, second);
    }
}
