//! Constant lookup tables shared by the check-digit schemes.
//!
//! Everything here is `const` data baked into the binary: there is no
//! initialisation step and no mutation path, so every table may be read from
//! any number of threads at once.

/// Totally anti-symmetric quasigroup of order 10 used by the Damm algorithm.
///
/// Indexed as `DAMM[interim][digit]`. Every row and column is a permutation
/// of `0..=9`, the diagonal is zero, and `DAMM[i][j] == DAMM[j][i]` only when
/// `i == j`.
#[rustfmt::skip]
pub const DAMM: [[u8; 10]; 10] = [
    [0, 3, 1, 7, 5, 9, 8, 6, 4, 2],
    [7, 0, 9, 2, 1, 5, 4, 8, 6, 3],
    [4, 2, 0, 6, 8, 7, 1, 3, 5, 9],
    [1, 7, 5, 0, 9, 8, 3, 4, 2, 6],
    [6, 1, 2, 3, 0, 4, 5, 9, 7, 8],
    [3, 6, 7, 4, 2, 0, 9, 5, 8, 1],
    [5, 8, 6, 9, 7, 2, 0, 1, 3, 4],
    [8, 9, 4, 5, 3, 6, 2, 0, 1, 7],
    [9, 4, 3, 8, 6, 1, 7, 2, 0, 5],
    [2, 5, 8, 1, 4, 3, 6, 7, 9, 0],
];

/// Multiplication table of the dihedral group D5 (Verhoeff `d`).
#[rustfmt::skip]
pub const VERHOEFF_D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Position-dependent permutations (Verhoeff `p`). Row `k` is the first row
/// permuted `k` times by `(1 5 8 9 4 2 7 0)(3 6)`.
#[rustfmt::skip]
pub const VERHOEFF_P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Group inverses in D5 (Verhoeff `inv`).
pub const VERHOEFF_INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// GS1 weights, applied from the rightmost payload digit leftwards.
pub const GS1_WEIGHTS: [u32; 2] = [3, 1];

/// Digits then uppercase letters; index is the symbol's value (0..=35).
pub const ALPHANUMERIC: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// [`ALPHANUMERIC`] plus `*` for value 36; the check alphabet of MOD 37-2.
pub const ALPHANUMERIC_STAR: &[u8; 37] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ*";

/// Bitcoin Base58 alphabet (no `0`, `O`, `I`, `l`).
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Reverse map from ASCII byte to Base58 value; `0xff` marks bytes outside
/// the alphabet.
pub const BASE58_DECODE: [u8; 128] = build_base58_decode();

const fn build_base58_decode() -> [u8; 128] {
    let mut map = [0xff_u8; 128];
    let mut i = 0;
    while i < BASE58_ALPHABET.len() {
        map[BASE58_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
}

/// Returns the value of an ASCII decimal digit.
#[inline]
pub(crate) fn decimal_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        _ => None,
    }
}

/// Returns the value (0..=35) of a digit or ASCII letter, case-insensitive.
#[inline]
pub(crate) fn alphanumeric_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'Z' => Some(byte - b'A' + 10),
        b'a'..=b'z' => Some(byte - b'a' + 10),
        _ => None,
    }
}

/// Returns the value (0..=57) of a Base58 symbol.
#[inline]
pub(crate) fn base58_value(byte: u8) -> Option<u8> {
    BASE58_DECODE
        .get(usize::from(byte))
        .copied()
        .filter(|&v| v != 0xff)
}
