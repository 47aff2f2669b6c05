//! Seeded payload generators.
//!
//! Every generator is driven by a [`StdRng`] seeded from
//! [`PayloadConfig::seed`], so the same config always yields the same data.

use checkdigit_core::Scheme;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIGITS: &[u8] = b"0123456789";
const ALPHANUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Configuration for the payload generators.
#[derive(Debug, Clone)]
pub struct PayloadConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of payloads to produce.
    pub count: usize,
    /// Symbols (or bytes) per payload; at least 1 is always produced.
    pub len: usize,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 1000 payloads of 12 symbols (card and GTIN sized).
    Small,
    /// 1000 payloads of 34 symbols (IBAN sized).
    Medium,
    /// 100 payloads of 256 symbols.
    Large,
}

impl SizeTier {
    /// Every tier, smallest first.
    pub const ALL: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium, SizeTier::Large];

    /// Returns the default `PayloadConfig` for this size tier.
    pub fn config(self, seed: u64) -> PayloadConfig {
        let (count, len) = match self {
            SizeTier::Small => (1000, 12),
            SizeTier::Medium => (1000, 34),
            SizeTier::Large => (100, 256),
        };
        PayloadConfig { seed, count, len }
    }

    /// Short label for benchmark IDs.
    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
        }
    }
}

/// Returns the symbols a payload for `scheme` may be drawn from.
pub fn alphabet_for(scheme: Scheme) -> &'static [u8] {
    match scheme {
        Scheme::LuhnBase36 | Scheme::Mod37_2 | Scheme::Mod37_36 => ALPHANUM,
        Scheme::Luhn
        | Scheme::Gs1Mod10
        | Scheme::Damm
        | Scheme::Verhoeff
        | Scheme::Mod97_10
        | Scheme::Mod11_10
        | Scheme::Mod11_2 => DIGITS,
    }
}

/// Generates `config.count` payloads (without check characters) for `scheme`.
pub fn generate_payloads(scheme: Scheme, config: &PayloadConfig) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let alphabet = alphabet_for(scheme);
    (0..config.count)
        .map(|_| random_symbols(&mut rng, alphabet, config.len.max(1)))
        .collect()
}

/// Generates complete values (payload plus check characters) for `scheme`.
pub fn generate_valid_values(scheme: Scheme, config: &PayloadConfig) -> Vec<String> {
    generate_payloads(scheme, config)
        .iter()
        .filter_map(|payload| scheme.append_check(payload).ok())
        .collect()
}

/// Generates byte payloads for Base58Check.
///
/// Roughly one payload in four starts with one to three zero bytes, so the
/// leading-`1` path is exercised alongside the numeric conversion.
pub fn generate_bytes(config: &PayloadConfig) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let len = config.len.max(1);
    (0..config.count)
        .map(|_| {
            let mut bytes: Vec<u8> = (0..len).map(|_| rng.r#gen()).collect();
            if rng.gen_ratio(1, 4) {
                let zeros = rng.gen_range(1..=3).min(len);
                bytes[..zeros].fill(0);
            }
            bytes
        })
        .collect()
}

fn random_symbols(rng: &mut StdRng, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}
