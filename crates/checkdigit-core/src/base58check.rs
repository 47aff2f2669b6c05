//! Base58Check: Base58 text with a double SHA-256 integrity suffix.
//!
//! Encoding appends `SHA-256(SHA-256(payload))[..4]` to the payload, reads
//! the result as one big-endian number, and writes it in base 58. Leading
//! zero bytes carry no numeric weight, so each one is written as an extra
//! leading `1` (the symbol for 0) and restored on decode.
//!
//! Use [`base58check_encode`] and [`base58check_decode`] as the entry points.

use sha2::{Digest, Sha256};

use crate::bignum::Natural;
use crate::error::{Base58Error, char_at};
use crate::tables::{BASE58_ALPHABET, base58_value};

/// Length of the integrity suffix in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Returns the first four bytes of `SHA-256(SHA-256(payload))`.
pub fn double_sha256_checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = Sha256::digest(payload);
    let second = Sha256::digest(first);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&second[..CHECKSUM_LEN]);
    out
}

/// Encodes raw bytes as plain Base58 (no suffix).
fn encode_base58(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();
    let mut n = Natural::from_be_bytes(bytes);
    let mut digits: Vec<u8> = Vec::with_capacity(bytes.len() * 138 / 100 + 1);
    while !n.is_zero() {
        digits.push(BASE58_ALPHABET[n.div_rem_small(58) as usize]);
    }
    let mut out = String::with_capacity(zeros + digits.len());
    out.extend(std::iter::repeat_n(char::from(BASE58_ALPHABET[0]), zeros));
    out.extend(digits.iter().rev().map(|&d| char::from(d)));
    out
}

/// Decodes plain Base58 text (no suffix handling) into bytes.
fn decode_base58(text: &str) -> Result<Vec<u8>, Base58Error> {
    let zero_symbol = BASE58_ALPHABET[0];
    let mut zeros = 0usize;
    let mut leading = true;
    let mut n = Natural::zero();
    for (pos, &byte) in text.as_bytes().iter().enumerate() {
        let value = base58_value(byte).ok_or_else(|| Base58Error::InvalidCharacter {
            position: pos,
            character: char_at(text, pos),
        })?;
        if leading && byte == zero_symbol {
            zeros += 1;
        } else {
            leading = false;
        }
        n.mul_add_small(58, u32::from(value));
    }
    let body = n.to_be_bytes();
    let mut out = vec![0u8; zeros];
    out.extend_from_slice(&body);
    Ok(out)
}

/// Encodes `payload` as Base58Check text.
///
/// Every byte string encodes, the empty one included (`"3QJmnh"`), so
/// anything [`base58check_decode`] returns encodes back to its input.
///
/// # Errors
///
/// None at present. The `Result` keeps the codec pair symmetric.
///
/// # Examples
///
/// ```
/// use checkdigit_core::base58check::base58check_encode;
///
/// assert_eq!(
///     base58check_encode(b"hello world").as_deref(),
///     Ok("3vQB7B6MrGQZaxCuFg4oh")
/// );
/// ```
pub fn base58check_encode(payload: &[u8]) -> Result<String, Base58Error> {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&double_sha256_checksum(payload));
    Ok(encode_base58(&data))
}

/// Decodes Base58Check text and verifies its integrity suffix.
///
/// Returns the payload with the 4-byte suffix removed.
///
/// # Errors
///
/// - [`Base58Error::Empty`]: `text` is empty.
/// - [`Base58Error::InvalidCharacter`]: a symbol outside the Base58 alphabet.
/// - [`Base58Error::TooShort`]: fewer than 4 bytes decoded.
/// - [`Base58Error::ChecksumMismatch`]: the suffix does not match.
///
/// # Examples
///
/// ```
/// use checkdigit_core::base58check::base58check_decode;
///
/// assert_eq!(
///     base58check_decode("3vQB7B6MrGQZaxCuFg4oh").as_deref(),
///     Ok(&b"hello world"[..])
/// );
/// ```
pub fn base58check_decode(text: &str) -> Result<Vec<u8>, Base58Error> {
    if text.is_empty() {
        return Err(Base58Error::Empty);
    }
    let mut data = decode_base58(text)?;
    if data.len() < CHECKSUM_LEN {
        return Err(Base58Error::TooShort { len: data.len() });
    }
    let split = data.len() - CHECKSUM_LEN;
    let mut found = [0u8; CHECKSUM_LEN];
    found.copy_from_slice(&data[split..]);
    let expected = double_sha256_checksum(&data[..split]);
    if expected != found {
        return Err(Base58Error::ChecksumMismatch { expected, found });
    }
    data.truncate(split);
    Ok(data)
}
