//! Name-addressable registry of the single-argument check-digit schemes.
//!
//! [`Scheme`] lets a collaborator pick an algorithm at runtime (from a CLI
//! argument or a configuration file) and call it through one interface.
//! Weighted mod-11 is not listed because it needs a weight vector; call
//! [`crate::weighted::compute_weighted_mod11`] directly.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::damm::{compute_damm, validate_damm};
use crate::error::CheckDigitError;
use crate::iso7064::{
    compute_mod11_2, compute_mod11_10, compute_mod37_2, compute_mod37_36, compute_mod97_10,
    validate_mod11_2, validate_mod11_10, validate_mod37_2, validate_mod37_36, validate_mod97_10,
};
use crate::verhoeff::{compute_verhoeff, validate_verhoeff};
use crate::weighted::{
    compute_gs1_mod10, compute_luhn, compute_luhn_base36, validate_gs1_mod10, validate_luhn,
    validate_luhn_base36,
};

/// A check-digit algorithm that needs nothing but the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    /// Luhn mod 10.
    #[serde(rename = "luhn")]
    Luhn,
    /// Luhn mod 36 over `0-9A-Z`.
    #[serde(rename = "luhn-base36")]
    LuhnBase36,
    /// GS1 mod 10 (GTIN, GLN, SSCC).
    #[serde(rename = "gs1-mod10")]
    Gs1Mod10,
    /// Damm quasigroup.
    #[serde(rename = "damm")]
    Damm,
    /// Verhoeff dihedral group.
    #[serde(rename = "verhoeff")]
    Verhoeff,
    /// ISO 7064 MOD 97-10, two check digits.
    #[serde(rename = "mod97-10")]
    Mod97_10,
    /// ISO 7064 MOD 11-10.
    #[serde(rename = "mod11-10")]
    Mod11_10,
    /// ISO 7064 MOD 11-2, check `0-9` or `X`.
    #[serde(rename = "mod11-2")]
    Mod11_2,
    /// ISO 7064 MOD 37-2, check `0-9`, `A-Z` or `*`.
    #[serde(rename = "mod37-2")]
    Mod37_2,
    /// ISO 7064 MOD 37-36.
    #[serde(rename = "mod37-36")]
    Mod37_36,
}

impl Scheme {
    /// Every scheme, in a stable order.
    pub const ALL: [Scheme; 10] = [
        Scheme::Luhn,
        Scheme::LuhnBase36,
        Scheme::Gs1Mod10,
        Scheme::Damm,
        Scheme::Verhoeff,
        Scheme::Mod97_10,
        Scheme::Mod11_10,
        Scheme::Mod11_2,
        Scheme::Mod37_2,
        Scheme::Mod37_36,
    ];

    /// Canonical kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Luhn => "luhn",
            Self::LuhnBase36 => "luhn-base36",
            Self::Gs1Mod10 => "gs1-mod10",
            Self::Damm => "damm",
            Self::Verhoeff => "verhoeff",
            Self::Mod97_10 => "mod97-10",
            Self::Mod11_10 => "mod11-10",
            Self::Mod11_2 => "mod11-2",
            Self::Mod37_2 => "mod37-2",
            Self::Mod37_36 => "mod37-36",
        }
    }

    /// Number of check characters the scheme appends.
    pub fn check_len(self) -> usize {
        match self {
            Self::Mod97_10 => 2,
            Self::Luhn
            | Self::LuhnBase36
            | Self::Gs1Mod10
            | Self::Damm
            | Self::Verhoeff
            | Self::Mod11_10
            | Self::Mod11_2
            | Self::Mod37_2
            | Self::Mod37_36 => 1,
        }
    }

    /// Computes the check characters for `payload`.
    ///
    /// # Errors
    ///
    /// Propagates the scheme's [`CheckDigitError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use checkdigit_core::Scheme;
    ///
    /// assert_eq!(Scheme::Mod97_10.compute("32142829123456987654321611").as_deref(), Ok("82"));
    /// assert_eq!(Scheme::Verhoeff.compute("236").as_deref(), Ok("3"));
    /// ```
    pub fn compute(self, payload: &str) -> Result<String, CheckDigitError> {
        let single = match self {
            Self::Mod97_10 => return compute_mod97_10(payload).map(|c| format!("{c:02}")),
            Self::Luhn => compute_luhn(payload),
            Self::LuhnBase36 => compute_luhn_base36(payload),
            Self::Gs1Mod10 => compute_gs1_mod10(payload),
            Self::Damm => compute_damm(payload),
            Self::Verhoeff => compute_verhoeff(payload),
            Self::Mod11_10 => compute_mod11_10(payload),
            Self::Mod11_2 => compute_mod11_2(payload),
            Self::Mod37_2 => compute_mod37_2(payload),
            Self::Mod37_36 => compute_mod37_36(payload),
        }?;
        Ok(single.to_string())
    }

    /// Returns `payload` followed by its check characters.
    ///
    /// # Errors
    ///
    /// Propagates the scheme's [`CheckDigitError`].
    pub fn append_check(self, payload: &str) -> Result<String, CheckDigitError> {
        let check = self.compute(payload)?;
        let mut out = String::with_capacity(payload.len() + check.len());
        out.push_str(payload);
        out.push_str(&check);
        Ok(out)
    }

    /// Verifies `value`, which ends in its check characters.
    pub fn validate(self, value: &str) -> bool {
        match self {
            Self::Luhn => validate_luhn(value),
            Self::LuhnBase36 => validate_luhn_base36(value),
            Self::Gs1Mod10 => validate_gs1_mod10(value),
            Self::Damm => validate_damm(value),
            Self::Verhoeff => validate_verhoeff(value),
            Self::Mod97_10 => validate_mod97_10(value),
            Self::Mod11_10 => validate_mod11_10(value),
            Self::Mod11_2 => validate_mod11_2(value),
            Self::Mod37_2 => validate_mod37_2(value),
            Self::Mod37_36 => validate_mod37_36(value),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = CheckDigitError;

    /// Parses a scheme name, ignoring ASCII case and accepting `_` for `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name() == wanted)
            .ok_or_else(|| CheckDigitError::UnknownScheme(s.to_owned()))
    }
}
