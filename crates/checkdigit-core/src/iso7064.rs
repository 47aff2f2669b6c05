//! ISO/IEC 7064 check character systems.
//!
//! Three shapes share the "running remainder" idea:
//!
//! - **Pure, two-digit**: MOD 97-10 (IBAN, LEI, ...). The payload is read as
//!   a decimal number and reduced modulo 97.
//! - **Pure, radix 2**: MOD 11-2 (ISNI, ORCID) and MOD 37-2. The running sum
//!   is doubled after every symbol and reduced modulo 11 or 37.
//! - **Hybrid**: MOD 11-10 and MOD 37-36. A residue modulo `M` is doubled
//!   modulo `M + 1` between symbols, with 0 standing in for `M`.
//!
//! As everywhere in this crate, `compute_*` fails loudly on symbols outside
//! the alphabet and `validate_*` just returns `false`.
//!
//! # References
//!
//! - ISO/IEC 7064:2003, Information technology, Security techniques,
//!   Check character systems.

use crate::error::{CheckDigitError, invalid_character};
use crate::tables::{ALPHANUMERIC, ALPHANUMERIC_STAR, alphanumeric_value, decimal_value};

// ---------------------------------------------------------------------------
// MOD 97-10
// ---------------------------------------------------------------------------

/// Returns the remainder modulo 97 of a decimal digit string of any length.
///
/// Letters must already have been transliterated to their two-digit codes
/// (`A` → `10`, …, `Z` → `35`) by the caller.
///
/// # Errors
///
/// - [`CheckDigitError::Empty`] if `digits` is empty.
/// - [`CheckDigitError::InvalidCharacter`] on any non-digit.
///
/// # Examples
///
/// ```
/// use checkdigit_core::iso7064::mod97_10_remainder;
///
/// assert_eq!(mod97_10_remainder("3214282912345698765432161182"), Ok(1));
/// ```
pub fn mod97_10_remainder(digits: &str) -> Result<u32, CheckDigitError> {
    if digits.is_empty() {
        return Err(CheckDigitError::Empty);
    }
    digits
        .as_bytes()
        .iter()
        .enumerate()
        .try_fold(0u32, |rem, (pos, &byte)| {
            let digit = decimal_value(byte).ok_or_else(|| invalid_character(digits, pos))?;
            Ok((rem * 10 + u32::from(digit)) % 97)
        })
}

/// Computes the two-digit MOD 97-10 check value (2..=98) for a decimal payload.
///
/// # Algorithm
///
/// The remainder is taken over the payload followed by two `0` digits
/// standing in for the check positions; the check value is `98 - remainder`.
/// Render it with two digits (`format!("{check:02}")`).
///
/// # Errors
///
/// - [`CheckDigitError::Empty`] if `payload` is empty.
/// - [`CheckDigitError::InvalidCharacter`] on any non-digit.
///
/// # Examples
///
/// ```
/// use checkdigit_core::iso7064::compute_mod97_10;
///
/// // GB82 WEST 1234 5698 7654 32, rearranged and transliterated.
/// assert_eq!(compute_mod97_10("32142829123456987654321611"), Ok(82));
/// ```
pub fn compute_mod97_10(payload: &str) -> Result<u8, CheckDigitError> {
    let rem = mod97_10_remainder(payload)?;
    // Two implicit trailing zeros.
    let rem = (rem * 100) % 97;
    Ok((98 - rem) as u8)
}

/// Verifies a decimal string ending in its two MOD 97-10 check digits.
///
/// The whole string, check digits included, must leave remainder 1.
///
/// # Examples
///
/// ```
/// use checkdigit_core::iso7064::validate_mod97_10;
///
/// assert!(validate_mod97_10("3214282912345698765432161182"));
/// assert!(!validate_mod97_10("3214282912345698765432161183"));
/// ```
pub fn validate_mod97_10(value: &str) -> bool {
    value.len() >= 3 && mod97_10_remainder(value) == Ok(1)
}

// ---------------------------------------------------------------------------
// Pure systems with radix 2: MOD 11-2 and MOD 37-2
// ---------------------------------------------------------------------------

/// Running sum of a pure radix-2 system: `sum = (sum + v) * 2 mod modulus`.
fn pure_sum(input: &str, modulus: u32, value: fn(u8) -> Option<u8>) -> Result<u32, CheckDigitError> {
    if input.is_empty() {
        return Err(CheckDigitError::Empty);
    }
    input
        .as_bytes()
        .iter()
        .enumerate()
        .try_fold(0u32, |sum, (pos, &byte)| {
            let v = value(byte).ok_or_else(|| invalid_character(input, pos))?;
            Ok(((sum + u32::from(v)) * 2) % modulus)
        })
}

/// Check value of a pure radix-2 system: `(modulus + 1 - sum) mod modulus`.
fn pure_check(sum: u32, modulus: u32) -> u32 {
    (modulus + 1 - sum) % modulus
}

/// Validates a pure radix-2 string: the sum over everything but the last
/// symbol plus the check value must be 1 modulo `modulus`.
fn pure_validate(
    value: &str,
    modulus: u32,
    payload_value: fn(u8) -> Option<u8>,
    check_value: fn(u8) -> Option<u8>,
) -> bool {
    let Some((&check, _)) = value.as_bytes().split_last() else {
        return false;
    };
    if value.len() < 2 || !check.is_ascii() {
        return false;
    }
    let Some(check) = check_value(check) else {
        return false;
    };
    match pure_sum(&value[..value.len() - 1], modulus, payload_value) {
        Ok(sum) => (sum + u32::from(check)) % modulus == 1,
        Err(_) => false,
    }
}

/// Value of a MOD 11-2 check symbol: a digit, or `X` for 10.
fn mod11_2_check_value(byte: u8) -> Option<u8> {
    match byte {
        b'X' => Some(10),
        other => decimal_value(other),
    }
}

/// Value of a MOD 37-2 check symbol: an alphanumeric, or `*` for 36.
fn mod37_2_check_value(byte: u8) -> Option<u8> {
    match byte {
        b'*' => Some(36),
        other => alphanumeric_value(other),
    }
}

/// Computes the ISO 7064 MOD 11-2 check character for a decimal payload.
///
/// The result is a digit, or `X` when the check value is 10.
///
/// # Errors
///
/// - [`CheckDigitError::Empty`] if `payload` is empty.
/// - [`CheckDigitError::InvalidCharacter`] on any non-digit.
///
/// # Examples
///
/// ```
/// use checkdigit_core::iso7064::compute_mod11_2;
///
/// // ORCID 0000-0002-1694-233X
/// assert_eq!(compute_mod11_2("000000021694233"), Ok('X'));
/// ```
pub fn compute_mod11_2(payload: &str) -> Result<char, CheckDigitError> {
    let sum = pure_sum(payload, 11, decimal_value)?;
    Ok(match pure_check(sum, 11) {
        10 => 'X',
        d => char::from(b'0' + d as u8),
    })
}

/// Verifies a decimal string ending in a MOD 11-2 check character (`0-9` or `X`).
pub fn validate_mod11_2(value: &str) -> bool {
    pure_validate(value, 11, decimal_value, mod11_2_check_value)
}

/// Computes the ISO 7064 MOD 37-2 check character for an alphanumeric payload.
///
/// Payload letters may be either case. The check character is drawn from
/// `0-9`, `A-Z` and `*` (value 36).
///
/// # Errors
///
/// - [`CheckDigitError::Empty`] if `payload` is empty.
/// - [`CheckDigitError::InvalidCharacter`] on anything but `[0-9A-Za-z]`.
pub fn compute_mod37_2(payload: &str) -> Result<char, CheckDigitError> {
    let sum = pure_sum(payload, 37, alphanumeric_value)?;
    Ok(char::from(ALPHANUMERIC_STAR[pure_check(sum, 37) as usize]))
}

/// Verifies an alphanumeric string ending in a MOD 37-2 check character.
pub fn validate_mod37_2(value: &str) -> bool {
    pure_validate(value, 37, alphanumeric_value, mod37_2_check_value)
}

// ---------------------------------------------------------------------------
// Hybrid systems: MOD 11-10 and MOD 37-36
// ---------------------------------------------------------------------------

/// `(check == 0 ? m : check) * 2 mod (m + 1)`.
fn double_mod(check: u32, m: u32) -> u32 {
    let carried = if check == 0 { m } else { check };
    (carried * 2) % (m + 1)
}

/// Runs a hybrid system with modulus `m` (10 or 36) over `input`.
///
/// The running value starts at `m / 2`, whose doubled form modulo `m + 1` is
/// `m`. Each symbol then applies
/// `check = ((check == 0 ? m : check) * 2 mod (m + 1) + v) mod m`.
fn hybrid_residue(input: &str, m: u32, value: fn(u8) -> Option<u8>) -> Result<u32, CheckDigitError> {
    if input.is_empty() {
        return Err(CheckDigitError::Empty);
    }
    input
        .as_bytes()
        .iter()
        .enumerate()
        .try_fold(m / 2, |check, (pos, &byte)| {
            let v = value(byte).ok_or_else(|| invalid_character(input, pos))?;
            Ok((double_mod(check, m) + u32::from(v)) % m)
        })
}

/// Final derivation of a hybrid check value:
/// `temp = 1 - ((check == 0 ? m : check) * 2) mod (m + 1)`, reduced mod `m`
/// with negatives folded back into `0..m`.
fn hybrid_check(check: u32, m: u32) -> u32 {
    let temp = 1 - i64::from(double_mod(check, m));
    temp.rem_euclid(i64::from(m)) as u32
}

/// Computes the ISO 7064 MOD 11-10 check digit for a decimal payload.
///
/// # Errors
///
/// - [`CheckDigitError::Empty`] if `payload` is empty.
/// - [`CheckDigitError::InvalidCharacter`] on any non-digit.
///
/// # Examples
///
/// ```
/// use checkdigit_core::iso7064::compute_mod11_10;
///
/// // Worked example from ISO/IEC 7064.
/// assert_eq!(compute_mod11_10("0794"), Ok('5'));
/// ```
pub fn compute_mod11_10(payload: &str) -> Result<char, CheckDigitError> {
    let check = hybrid_residue(payload, 10, decimal_value)?;
    Ok(char::from(b'0' + hybrid_check(check, 10) as u8))
}

/// Verifies a decimal string ending in a MOD 11-10 check digit.
///
/// Folding the check digit in like any other digit must leave a residue of 1.
pub fn validate_mod11_10(value: &str) -> bool {
    value.len() >= 2 && hybrid_residue(value, 10, decimal_value) == Ok(1)
}

/// Computes the ISO 7064 MOD 37-36 check character for an alphanumeric payload.
///
/// Payload letters may be either case; the check character is `0-9` or an
/// uppercase letter.
///
/// # Errors
///
/// - [`CheckDigitError::Empty`] if `payload` is empty.
/// - [`CheckDigitError::InvalidCharacter`] on anything but `[0-9A-Za-z]`.
///
/// # Examples
///
/// ```
/// use checkdigit_core::iso7064::compute_mod37_36;
///
/// // Global Release Identifier example.
/// assert_eq!(compute_mod37_36("A12425GABC1234002"), Ok('M'));
/// ```
pub fn compute_mod37_36(payload: &str) -> Result<char, CheckDigitError> {
    let check = hybrid_residue(payload, 36, alphanumeric_value)?;
    Ok(char::from(ALPHANUMERIC[hybrid_check(check, 36) as usize]))
}

/// Verifies an alphanumeric string ending in a MOD 37-36 check character.
pub fn validate_mod37_36(value: &str) -> bool {
    value.len() >= 2 && hybrid_residue(value, 36, alphanumeric_value) == Ok(1)
}
