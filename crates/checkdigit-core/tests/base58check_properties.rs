//! Property-based tests for the Base58Check codec.
//!
//! Covers round trips over 1–64 byte payloads with and without leading zero
//! bytes, and checks that any single-symbol corruption is reported instead
//! of silently decoding to different bytes.
#![allow(clippy::expect_used)]

use checkdigit_core::tables::BASE58_ALPHABET;
use checkdigit_core::{Base58Error, base58check_decode, base58check_encode};
use proptest::prelude::*;

/// A payload of 1–64 bytes with 0–3 extra leading zero bytes.
fn payload() -> impl Strategy<Value = Vec<u8>> {
    (0usize..=3, prop::collection::vec(any::<u8>(), 1..=61)).prop_map(|(zeros, body)| {
        let mut bytes = vec![0u8; zeros];
        bytes.extend(body);
        bytes
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn round_trip(bytes in payload()) {
        let text = base58check_encode(&bytes).expect("encodes");
        prop_assert_eq!(base58check_decode(&text), Ok(bytes));
    }

    /// Exactly one leading `1` per leading zero byte.
    #[test]
    fn leading_ones_count_leading_zero_bytes(bytes in payload()) {
        let text = base58check_encode(&bytes).expect("encodes");
        let zeros = bytes.iter().take_while(|&&b| b == 0).count();
        let ones = text.bytes().take_while(|&b| b == b'1').count();
        if zeros < bytes.len() {
            prop_assert_eq!(ones, zeros);
        } else {
            // An all-zero payload may be followed by a suffix that itself
            // starts with zero bytes.
            prop_assert!(ones >= zeros);
        }
    }

    /// Replacing one symbol with a different alphabet symbol never decodes.
    #[test]
    fn substituted_symbol_is_detected(
        bytes in payload(),
        index in any::<prop::sample::Index>(),
        symbol in any::<prop::sample::Index>(),
    ) {
        let text = base58check_encode(&bytes).expect("encodes");
        let mut corrupted = text.clone().into_bytes();
        let i = index.index(corrupted.len());
        let mut replacement = BASE58_ALPHABET[symbol.index(BASE58_ALPHABET.len())];
        if replacement == corrupted[i] {
            replacement = BASE58_ALPHABET[(symbol.index(BASE58_ALPHABET.len()) + 1) % BASE58_ALPHABET.len()];
        }
        corrupted[i] = replacement;
        let corrupted = String::from_utf8(corrupted).expect("ascii");
        let result = base58check_decode(&corrupted);
        prop_assert!(result.is_err(), "{} -> {} decoded as {:?}", text, corrupted, result);
    }

    /// Replacing one symbol with something outside the alphabet is a format error.
    #[test]
    fn foreign_symbol_is_a_format_error(
        bytes in payload(),
        index in any::<prop::sample::Index>(),
        foreign in "[0OIl+/=_ ]",
    ) {
        let text = base58check_encode(&bytes).expect("encodes");
        let i = index.index(text.len());
        let corrupted = format!("{}{}{}", &text[..i], foreign, &text[i + 1..]);
        let result = base58check_decode(&corrupted);
        prop_assert_eq!(
            result,
            Err(Base58Error::InvalidCharacter {
                position: i,
                character: foreign.chars().next().expect("one char"),
            })
        );
    }
}
