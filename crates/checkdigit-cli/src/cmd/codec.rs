//! Implementation of `checkdigit encode <HEX>` and `checkdigit decode <TEXT>`.
//!
//! Exit codes:
//! - 0 = success
//! - 1 = `decode` found a checksum mismatch
//! - 2 = bad hex or malformed Base58 text
use std::io::Write;

use checkdigit_core::{base58check_decode, base58check_encode};

use super::{normalize, stream_error};
use crate::error::CliError;
use crate::format::{CodecDirection, CodecRecord, FormatterConfig, write_codec};

/// Runs the `encode` command.
///
/// An optional `0x` prefix and surrounding whitespace are ignored.
///
/// # Errors
///
/// [`CliError::InvalidHex`] if `hex_arg` is not an even-length hex string.
/// An empty argument encodes the empty payload.
pub fn encode(hex_arg: &str, config: &FormatterConfig) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    encode_to(&mut stdout.lock(), hex_arg, config)
}

/// Runs the `decode` command.
///
/// # Errors
///
/// [`CliError::MalformedBase58`] for empty, unknown-symbol, or too-short
/// text; [`CliError::ChecksumMismatch`] when the suffix does not match.
pub fn decode(text: &str, strip: bool, config: &FormatterConfig) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    decode_to(&mut stdout.lock(), text, strip, config)
}

fn encode_to<W: Write>(
    out: &mut W,
    hex_arg: &str,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let trimmed = hex_arg.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bytes = hex::decode(digits).map_err(|e| CliError::InvalidHex {
        detail: e.to_string(),
    })?;

    let text = base58check_encode(&bytes)?;
    let record = CodecRecord {
        hex: &hex::encode(&bytes),
        base58check: &text,
    };
    write_codec(out, &record, CodecDirection::Encode, config).map_err(stream_error("stdout"))
}

fn decode_to<W: Write>(
    out: &mut W,
    text: &str,
    strip: bool,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let text = normalize(text.trim(), strip);
    let bytes = base58check_decode(&text)?;
    let record = CodecRecord {
        hex: &hex::encode(&bytes),
        base58check: &text,
    };
    write_codec(out, &record, CodecDirection::Decode, config).map_err(stream_error("stdout"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
