//! Weighted positional checksums: Luhn, Luhn base-36, GS1 mod-10 and
//! weighted mod-11.
//!
//! Each scheme comes as a pair. `compute_*` takes the payload without its
//! check symbol and returns the check value, failing with
//! [`CheckDigitError`] on symbols outside the alphabet. `validate_*` takes the
//! payload with its check symbol appended and answers `true` or `false`; bad
//! symbols and wrong lengths are simply `false`.
//!
//! All functions walk the input bytes in place without allocating.

use crate::error::{CheckDigitError, invalid_character};
use crate::tables::{ALPHANUMERIC, GS1_WEIGHTS, alphanumeric_value, decimal_value};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Position parity of the check symbol relative to the rightmost input byte.
///
/// When computing, the rightmost byte is the last payload symbol and is
/// already "position 1" of the finished number. When validating, the
/// rightmost byte is the check symbol itself.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Tail {
    Payload,
    Check,
}

/// Luhn sum reduced modulo `radix`.
///
/// Every second symbol counting from the right is doubled (starting with the
/// rightmost one for [`Tail::Payload`], the one left of it for
/// [`Tail::Check`]); a doubled value of `radix` or more has `radix - 1`
/// subtracted, which equals summing its base-`radix` digits.
fn luhn_residue(
    input: &str,
    radix: u32,
    value: fn(u8) -> Option<u8>,
    tail: Tail,
) -> Result<u32, CheckDigitError> {
    if input.is_empty() {
        return Err(CheckDigitError::Empty);
    }
    let mut sum = 0u32;
    for (i, (pos, &byte)) in input.as_bytes().iter().enumerate().rev().enumerate() {
        let v = u32::from(value(byte).ok_or_else(|| invalid_character(input, pos))?);
        let doubled = (i % 2 == 0) == (tail == Tail::Payload);
        let addend = if doubled {
            let d = v * 2;
            if d >= radix { d - (radix - 1) } else { d }
        } else {
            v
        };
        sum = (sum + addend) % radix;
    }
    Ok(sum)
}

/// GS1 weighted sum modulo 10. Weight 3 falls on the rightmost payload digit.
fn gs1_residue(input: &str, tail: Tail) -> Result<u32, CheckDigitError> {
    if input.is_empty() {
        return Err(CheckDigitError::Empty);
    }
    let offset = usize::from(tail == Tail::Check);
    let mut sum = 0u32;
    for (i, (pos, &byte)) in input.as_bytes().iter().enumerate().rev().enumerate() {
        let digit = u32::from(decimal_value(byte).ok_or_else(|| invalid_character(input, pos))?);
        sum = (sum + digit * GS1_WEIGHTS[(i + offset) % GS1_WEIGHTS.len()]) % 10;
    }
    Ok(sum)
}

/// Splits `input` into payload and final check byte, rejecting inputs that
/// leave an empty payload.
fn split_check(input: &str) -> Option<(&str, u8)> {
    let (&check, _) = input.as_bytes().split_last()?;
    if input.len() < 2 || !check.is_ascii() {
        return None;
    }
    Some((&input[..input.len() - 1], check))
}

// ---------------------------------------------------------------------------
// Luhn (mod 10)
// ---------------------------------------------------------------------------

/// Computes the Luhn check digit for a decimal payload.
///
/// # Algorithm
///
/// Scanning right to left, every second digit starting with the rightmost is
/// doubled, and 9 is subtracted from doubled values above 9. The check digit
/// is `(10 - sum mod 10) mod 10`.
///
/// # Errors
///
/// - [`CheckDigitError::Empty`] if `payload` is empty.
/// - [`CheckDigitError::InvalidCharacter`] on any non-digit.
///
/// # Examples
///
/// ```
/// use checkdigit_core::weighted::compute_luhn;
///
/// assert_eq!(compute_luhn("7992739871"), Ok('3'));
/// ```
pub fn compute_luhn(payload: &str) -> Result<char, CheckDigitError> {
    let sum = luhn_residue(payload, 10, decimal_value, Tail::Payload)?;
    Ok(char::from(b'0' + ((10 - sum) % 10) as u8))
}

/// Verifies a decimal string whose last digit is a Luhn check digit.
///
/// # Examples
///
/// ```
/// use checkdigit_core::weighted::validate_luhn;
///
/// assert!(validate_luhn("79927398713"));
/// assert!(!validate_luhn("79927398714"));
/// ```
pub fn validate_luhn(value: &str) -> bool {
    value.len() >= 2
        && matches!(
            luhn_residue(value, 10, decimal_value, Tail::Check),
            Ok(0)
        )
}

// ---------------------------------------------------------------------------
// Luhn mod N, N = 36
// ---------------------------------------------------------------------------

/// Computes the Luhn mod 36 check character for an alphanumeric payload.
///
/// Symbols `0`–`9` are worth 0–9 and letters `A`–`Z` (either case) 10–35.
/// Doubled values of 36 or more have 35 subtracted. The check character is
/// returned in uppercase.
///
/// # Errors
///
/// - [`CheckDigitError::Empty`] if `payload` is empty.
/// - [`CheckDigitError::InvalidCharacter`] on anything but `[0-9A-Za-z]`.
///
/// # Examples
///
/// ```
/// use checkdigit_core::weighted::compute_luhn_base36;
///
/// assert_eq!(compute_luhn_base36("A1B2C3"), Ok('R'));
/// ```
pub fn compute_luhn_base36(payload: &str) -> Result<char, CheckDigitError> {
    let sum = luhn_residue(payload, 36, alphanumeric_value, Tail::Payload)?;
    Ok(char::from(ALPHANUMERIC[((36 - sum) % 36) as usize]))
}

/// Verifies an alphanumeric string ending in a Luhn mod 36 check character.
pub fn validate_luhn_base36(value: &str) -> bool {
    value.len() >= 2
        && matches!(
            luhn_residue(value, 36, alphanumeric_value, Tail::Check),
            Ok(0)
        )
}

// ---------------------------------------------------------------------------
// GS1 mod 10
// ---------------------------------------------------------------------------

/// Computes the GS1 mod-10 check digit for a GTIN, GLN or SSCC payload.
///
/// # Algorithm
///
/// Weights alternate 3, 1, 3, … starting from the rightmost payload digit.
/// The check digit `d` satisfies `(weighted_sum + d) mod 10 == 0`, i.e.
/// `d == (10 - weighted_sum mod 10) mod 10`.
///
/// # Errors
///
/// - [`CheckDigitError::Empty`] if `payload` is empty.
/// - [`CheckDigitError::InvalidCharacter`] on any non-digit.
///
/// # Examples
///
/// ```
/// use checkdigit_core::weighted::compute_gs1_mod10;
///
/// // GLN example from the GS1 General Specifications.
/// assert_eq!(compute_gs1_mod10("061414100041"), Ok('8'));
/// ```
pub fn compute_gs1_mod10(payload: &str) -> Result<char, CheckDigitError> {
    let sum = gs1_residue(payload, Tail::Payload)?;
    Ok(char::from(b'0' + ((10 - sum) % 10) as u8))
}

/// Verifies a GS1 key (any length) whose last digit is the mod-10 check digit.
///
/// # Examples
///
/// ```
/// use checkdigit_core::weighted::validate_gs1_mod10;
///
/// assert!(validate_gs1_mod10("0614141000418"));
/// assert!(!validate_gs1_mod10("0614141000419"));
/// ```
pub fn validate_gs1_mod10(value: &str) -> bool {
    value.len() >= 2 && matches!(gs1_residue(value, Tail::Check), Ok(0))
}

// ---------------------------------------------------------------------------
// Weighted mod 11
// ---------------------------------------------------------------------------

/// Direction in which a weight vector is laid over the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightDirection {
    /// `weights[0]` multiplies the leftmost payload digit.
    LeftToRight,
    /// `weights[0]` multiplies the rightmost payload digit.
    RightToLeft,
}

/// Computes `sum(digit * weight) mod 11` over a decimal payload.
///
/// The weight vector repeats when the payload is longer than it. The raw
/// residue (0..=10) is returned; whether 10 is acceptable, and how it is
/// written, is up to the caller.
///
/// # Errors
///
/// - [`CheckDigitError::Empty`] if `payload` is empty.
/// - [`CheckDigitError::EmptyWeights`] if `weights` is empty.
/// - [`CheckDigitError::InvalidCharacter`] on any non-digit.
///
/// # Examples
///
/// ```
/// use checkdigit_core::weighted::{WeightDirection, compute_weighted_mod11};
///
/// let weights = [10, 9, 8, 7, 6, 5, 4, 3, 2];
/// assert_eq!(
///     compute_weighted_mod11("123456789", &weights, WeightDirection::LeftToRight),
///     Ok(1)
/// );
/// ```
pub fn compute_weighted_mod11(
    payload: &str,
    weights: &[u32],
    direction: WeightDirection,
) -> Result<u8, CheckDigitError> {
    if payload.is_empty() {
        return Err(CheckDigitError::Empty);
    }
    if weights.is_empty() {
        return Err(CheckDigitError::EmptyWeights);
    }
    let bytes = payload.as_bytes();
    let mut sum = 0u32;
    for (i, &byte) in bytes.iter().enumerate() {
        let digit = u32::from(decimal_value(byte).ok_or_else(|| invalid_character(payload, i))?);
        let k = match direction {
            WeightDirection::LeftToRight => i,
            WeightDirection::RightToLeft => bytes.len() - 1 - i,
        };
        sum = (sum + digit * (weights[k % weights.len()] % 11)) % 11;
    }
    Ok(sum as u8)
}

/// Verifies a decimal string whose last digit equals the weighted mod-11
/// residue of the preceding digits.
///
/// A residue of 10 cannot be written as one decimal digit, so payloads that
/// produce it never validate here.
pub fn validate_weighted_mod11(value: &str, weights: &[u32], direction: WeightDirection) -> bool {
    let Some((payload, check)) = split_check(value) else {
        return false;
    };
    let Some(check) = decimal_value(check) else {
        return false;
    };
    compute_weighted_mod11(payload, weights, direction) == Ok(check)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    // --- Luhn ---

    /// The textbook Luhn example.
    #[test]
    fn luhn_textbook_vector() {
        assert_eq!(compute_luhn("7992739871"), Ok('3'));
        assert!(validate_luhn("79927398713"));
        assert!(!validate_luhn("79927398714"));
    }

    /// Visa test card number.
    #[test]
    fn luhn_visa_test_card() {
        assert_eq!(compute_luhn("411111111111111"), Ok('1'));
        assert!(validate_luhn("4111111111111111"));
    }

    #[test]
    fn luhn_compute_rejects_non_digit() {
        assert_eq!(
            compute_luhn("79927-39871"),
            Err(CheckDigitError::InvalidCharacter {
                position: 5,
                character: '-'
            })
        );
        assert_eq!(compute_luhn(""), Err(CheckDigitError::Empty));
    }

    #[test]
    fn luhn_validate_never_errors() {
        assert!(!validate_luhn(""));
        assert!(!validate_luhn("0"));
        assert!(!validate_luhn("7992739871X"));
        assert!(!validate_luhn("799273 98713"));
    }

    /// Doubling 9 gives 18, which folds back to 9.
    #[test]
    fn luhn_doubled_nine() {
        assert_eq!(compute_luhn("9"), Ok('1'));
        assert!(validate_luhn("91"));
        assert!(!validate_luhn("98"));
    }

    // --- Luhn base 36 ---

    #[test]
    fn luhn_base36_vectors() {
        assert_eq!(compute_luhn_base36("A1B2C3"), Ok('R'));
        assert_eq!(compute_luhn_base36("ZZZZ"), Ok('4'));
        assert!(validate_luhn_base36("A1B2C3R"));
        assert!(!validate_luhn_base36("A1B2C3S"));
    }

    #[test]
    fn luhn_base36_is_case_insensitive() {
        assert_eq!(compute_luhn_base36("a1b2c3"), Ok('R'));
        assert!(validate_luhn_base36("a1b2c3r"));
    }

    #[test]
    fn luhn_base36_rejects_symbols() {
        assert_eq!(
            compute_luhn_base36("AB_C"),
            Err(CheckDigitError::InvalidCharacter {
                position: 2,
                character: '_'
            })
        );
        assert!(!validate_luhn_base36("AB_CR"));
    }

    /// Numeric-only payloads in base 36 differ from plain Luhn because the
    /// subtraction threshold moves from 10 to 36.
    #[test]
    fn luhn_base36_differs_from_mod10_on_digits() {
        // 9 doubled: 18, below 36, so no subtraction; 36 - 18 = 18 -> 'I'.
        assert_eq!(compute_luhn_base36("9"), Ok('I'));
    }

    // --- GS1 ---

    /// Known-valid GLN from the GS1 specification example.
    #[test]
    fn gs1_mod10_valid_gln_example() {
        assert!(validate_gs1_mod10("0614141000418"));
        assert_eq!(compute_gs1_mod10("061414100041"), Ok('8'));
    }

    /// A commonly cited EAN-13 test vector.
    #[test]
    fn gs1_mod10_valid_ean13() {
        assert!(validate_gs1_mod10("5901234123457"));
        assert_eq!(compute_gs1_mod10("590123412345"), Ok('7'));
    }

    /// SSCC-18 uses the same weights across 17 payload digits.
    #[test]
    fn gs1_mod10_valid_sscc() {
        assert_eq!(compute_gs1_mod10("00614141123452345"), Ok('2'));
        assert!(validate_gs1_mod10("006141411234523452"));
    }

    /// GTIN-8 style short key.
    #[test]
    fn gs1_mod10_short_key() {
        let check = compute_gs1_mod10("9638507").expect("digits");
        assert!(validate_gs1_mod10(&format!("9638507{check}")));
    }

    #[test]
    fn gs1_mod10_invalid_corrupt_check_digit() {
        assert!(!validate_gs1_mod10("0614141000419"));
        assert!(!validate_gs1_mod10("0614141000428"));
    }

    #[test]
    fn gs1_mod10_all_zeros() {
        assert!(validate_gs1_mod10("0000000000000"));
        assert!(!validate_gs1_mod10("0000000000001"));
    }

    #[test]
    fn gs1_mod10_non_digit() {
        assert!(!validate_gs1_mod10("061414100041X"));
        assert!(compute_gs1_mod10("06141410004X").is_err());
    }

    // --- Weighted mod 11 ---

    #[test]
    fn weighted_mod11_left_to_right() {
        let weights = [10, 9, 8, 7, 6, 5, 4, 3, 2];
        assert_eq!(
            compute_weighted_mod11("123456789", &weights, WeightDirection::LeftToRight),
            Ok(1)
        );
        assert!(validate_weighted_mod11(
            "1234567891",
            &weights,
            WeightDirection::LeftToRight
        ));
    }

    #[test]
    fn weighted_mod11_right_to_left_cycles_weights() {
        let weights = [2, 3, 4, 5, 6, 7];
        assert_eq!(
            compute_weighted_mod11("12345678", &weights, WeightDirection::RightToLeft),
            Ok(6)
        );
        let weights = [2, 3, 4, 5, 6, 7, 8, 9];
        assert_eq!(
            compute_weighted_mod11("03134134", &weights, WeightDirection::RightToLeft),
            Ok(2)
        );
    }

    #[test]
    fn weighted_mod11_residue_ten_is_returned_raw() {
        // 1*10 = 10.
        assert_eq!(
            compute_weighted_mod11("1", &[10], WeightDirection::LeftToRight),
            Ok(10)
        );
        assert!(!validate_weighted_mod11("10", &[10], WeightDirection::LeftToRight));
    }

    #[test]
    fn weighted_mod11_errors() {
        assert_eq!(
            compute_weighted_mod11("123", &[], WeightDirection::LeftToRight),
            Err(CheckDigitError::EmptyWeights)
        );
        assert_eq!(
            compute_weighted_mod11("", &[1], WeightDirection::LeftToRight),
            Err(CheckDigitError::Empty)
        );
        assert!(compute_weighted_mod11("1a3", &[1], WeightDirection::LeftToRight).is_err());
        assert!(!validate_weighted_mod11("1234", &[], WeightDirection::LeftToRight));
        assert!(!validate_weighted_mod11("1", &[1], WeightDirection::LeftToRight));
        assert!(!validate_weighted_mod11("12é", &[1], WeightDirection::LeftToRight));
    }
}
