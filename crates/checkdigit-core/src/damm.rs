//! Damm check digit over a totally anti-symmetric quasigroup of order 10.
//!
//! A single interim digit is threaded through [`DAMM`] left to right. The
//! check digit is the final interim value, and a number is valid when
//! folding its check digit in as well brings the interim back to zero. The
//! scheme catches every single-digit error and every adjacent transposition.

use crate::error::{CheckDigitError, invalid_character};
use crate::tables::{DAMM, decimal_value};

/// Folds `input` through the quasigroup and returns the final interim digit.
fn interim(input: &str) -> Result<u8, CheckDigitError> {
    if input.is_empty() {
        return Err(CheckDigitError::Empty);
    }
    input
        .as_bytes()
        .iter()
        .enumerate()
        .try_fold(0u8, |c, (pos, &byte)| {
            let digit = decimal_value(byte).ok_or_else(|| invalid_character(input, pos))?;
            Ok(DAMM[usize::from(c)][usize::from(digit)])
        })
}

/// Computes the Damm check digit for a decimal payload.
///
/// # Errors
///
/// - [`CheckDigitError::Empty`] if `payload` is empty.
/// - [`CheckDigitError::InvalidCharacter`] on any non-digit.
///
/// # Examples
///
/// ```
/// use checkdigit_core::damm::compute_damm;
///
/// assert_eq!(compute_damm("572"), Ok('4'));
/// ```
pub fn compute_damm(payload: &str) -> Result<char, CheckDigitError> {
    interim(payload).map(|c| char::from(b'0' + c))
}

/// Verifies a decimal string whose last digit is a Damm check digit.
///
/// # Examples
///
/// ```
/// use checkdigit_core::damm::validate_damm;
///
/// assert!(validate_damm("5724"));
/// assert!(!validate_damm("5274"));
/// ```
pub fn validate_damm(value: &str) -> bool {
    value.len() >= 2 && interim(value) == Ok(0)
}
