//! Invariant checkers run on generated data before it is benchmarked.

use checkdigit_core::{Scheme, base58check_decode, base58check_encode};

/// Verifies that every payload validates once its check characters are
/// appended.
pub fn check_round_trip(scheme: Scheme, payloads: &[String]) -> Result<(), String> {
    for payload in payloads {
        let value = scheme
            .append_check(payload)
            .map_err(|e| format!("{scheme}: compute failed for {payload}: {e}"))?;
        if !scheme.validate(&value) {
            return Err(format!("{scheme}: rejected its own value {value}"));
        }
    }
    Ok(())
}

/// Verifies Base58Check round trips for every payload.
pub fn check_base58_round_trip(payloads: &[Vec<u8>]) -> Result<(), String> {
    for payload in payloads {
        let text = base58check_encode(payload).map_err(|e| format!("encode failed: {e}"))?;
        let back = base58check_decode(&text).map_err(|e| format!("decode of {text} failed: {e}"))?;
        if &back != payload {
            return Err(format!("{text} decoded to different bytes"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::{SizeTier, generate_bytes, generate_payloads};

    #[test]
    fn generated_payloads_round_trip() {
        for tier in SizeTier::ALL {
            let config = tier.config(42);
            for scheme in Scheme::ALL {
                check_round_trip(scheme, &generate_payloads(scheme, &config)).expect("round trip");
            }
        }
    }

    #[test]
    fn generated_bytes_round_trip() {
        check_base58_round_trip(&generate_bytes(&SizeTier::Medium.config(42)))
            .expect("round trip");
    }
}
