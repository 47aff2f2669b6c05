#![deny(clippy::print_stdout, clippy::print_stderr)]
//! Check-digit kernel.
//!
//! Pure, allocation-light implementations of the check-character algorithms
//! that identifier validators delegate to: Luhn (mod 10 and mod 36), GS1
//! mod-10, weighted mod-11, Damm, Verhoeff, the ISO 7064 family, and the
//! Base58Check codec.
//!
//! Every scheme has a strict `compute_*` function returning
//! `Result<_, CheckDigitError>` and a permissive `validate_*` function
//! returning `bool`. All lookup tables are `const` data, so every function is
//! safe to call from any number of threads.

pub mod base58check;
mod bignum;
pub mod damm;
pub mod error;
pub mod iso7064;
pub mod scheme;
pub mod tables;
pub mod verhoeff;
pub mod weighted;

pub use base58check::{CHECKSUM_LEN, base58check_decode, base58check_encode, double_sha256_checksum};
pub use damm::{compute_damm, validate_damm};
pub use error::{Base58Error, Base58ErrorKind, CheckDigitError};
pub use iso7064::{
    compute_mod11_2, compute_mod11_10, compute_mod37_2, compute_mod37_36, compute_mod97_10,
    mod97_10_remainder, validate_mod11_2, validate_mod11_10, validate_mod37_2, validate_mod37_36,
    validate_mod97_10,
};
pub use scheme::Scheme;
pub use verhoeff::{compute_verhoeff, validate_verhoeff};
pub use weighted::{
    WeightDirection, compute_gs1_mod10, compute_luhn, compute_luhn_base36,
    compute_weighted_mod11, validate_gs1_mod10, validate_luhn, validate_luhn_base36,
    validate_weighted_mod11,
};

/// Returns the current version of the checkdigit-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
