//! Verhoeff check digit over the dihedral group D5.
//!
//! Digits are consumed right to left. The digit at position `i` (0 for the
//! rightmost) is permuted by row `i mod 8` of [`VERHOEFF_P`] before being
//! multiplied into the accumulator through [`VERHOEFF_D`]. When generating,
//! the not-yet-appended check digit will occupy position 0, so every payload
//! digit is shifted one row along: row `(i + 1) mod 8`.

use crate::error::{CheckDigitError, invalid_character};
use crate::tables::{VERHOEFF_D, VERHOEFF_INV, VERHOEFF_P, decimal_value};

/// Accumulates `input` right to left, applying permutation row
/// `(i + shift) mod 8` to the digit at position `i`.
fn accumulate(input: &str, shift: usize) -> Result<u8, CheckDigitError> {
    if input.is_empty() {
        return Err(CheckDigitError::Empty);
    }
    input
        .as_bytes()
        .iter()
        .enumerate()
        .rev()
        .enumerate()
        .try_fold(0u8, |c, (i, (pos, &byte))| {
            let digit = decimal_value(byte).ok_or_else(|| invalid_character(input, pos))?;
            let permuted = VERHOEFF_P[(i + shift) % VERHOEFF_P.len()][usize::from(digit)];
            Ok(VERHOEFF_D[usize::from(c)][usize::from(permuted)])
        })
}

/// Computes the Verhoeff check digit for a decimal payload.
///
/// # Errors
///
/// - [`CheckDigitError::Empty`] if `payload` is empty.
/// - [`CheckDigitError::InvalidCharacter`] on any non-digit.
///
/// # Examples
///
/// ```
/// use checkdigit_core::verhoeff::compute_verhoeff;
///
/// assert_eq!(compute_verhoeff("236"), Ok('3'));
/// ```
pub fn compute_verhoeff(payload: &str) -> Result<char, CheckDigitError> {
    let c = accumulate(payload, 1)?;
    Ok(char::from(b'0' + VERHOEFF_INV[usize::from(c)]))
}

/// Verifies a decimal string whose last digit is a Verhoeff check digit.
///
/// # Examples
///
/// ```
/// use checkdigit_core::verhoeff::validate_verhoeff;
///
/// assert!(validate_verhoeff("2363"));
/// assert!(!validate_verhoeff("2364"));
/// ```
pub fn validate_verhoeff(value: &str) -> bool {
    value.len() >= 2 && accumulate(value, 0) == Ok(0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    /// Verhoeff's own worked example. Dropping the `+ 1` row shift when
    /// generating yields `0` here instead of `3`.
    #[test]
    fn published_vector_236_uses_shifted_rows() {
        assert_eq!(compute_verhoeff("236"), Ok('3'));
        assert!(validate_verhoeff("2363"));
        assert_ne!(accumulate("236", 0).map(|c| VERHOEFF_INV[usize::from(c)]), Ok(3));
    }

    #[test]
    fn further_vectors() {
        assert_eq!(compute_verhoeff("12345"), Ok('1'));
        assert!(validate_verhoeff("123451"));
        assert_eq!(compute_verhoeff("142857"), Ok('0'));
        assert!(validate_verhoeff("1428570"));
        assert_eq!(compute_verhoeff("123456789012"), Ok('0'));
    }

    /// Payloads longer than eight digits wrap around the permutation rows.
    #[test]
    fn long_payload_wraps_rows() {
        let payload = "8473643095483728456789";
        let check = compute_verhoeff(payload).expect("digits");
        assert!(validate_verhoeff(&format!("{payload}{check}")));
    }

    #[test]
    fn errors_are_detected() {
        assert!(!validate_verhoeff("2364"));
        assert!(!validate_verhoeff("3263"));
        assert!(!validate_verhoeff("2633"));
    }

    #[test]
    fn compute_rejects_non_digits() {
        assert_eq!(
            compute_verhoeff("2x6"),
            Err(CheckDigitError::InvalidCharacter {
                position: 1,
                character: 'x'
            })
        );
        assert_eq!(compute_verhoeff(""), Err(CheckDigitError::Empty));
    }

    #[test]
    fn validate_rejects_without_error() {
        assert!(!validate_verhoeff(""));
        assert!(!validate_verhoeff("3"));
        assert!(!validate_verhoeff("23-63"));
    }
}
