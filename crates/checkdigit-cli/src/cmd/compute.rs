//! Implementation of `checkdigit compute <SCHEME> <PAYLOAD>...`.
//!
//! Prints one check value per payload on stdout, in argument order. The
//! first payload the scheme cannot handle stops the run with exit code 2;
//! results already printed stay printed.
use std::io::Write;
use std::time::Instant;

use checkdigit_core::Scheme;

use super::{normalize, stream_error};
use crate::error::CliError;
use crate::format::{CheckRecord, FormatterConfig, write_check, write_timing};

/// Runs the `compute` command against the process's stdout and stderr.
///
/// # Errors
///
/// - [`CliError::InvalidPayload`]: a payload is empty or has a symbol
///   outside the scheme's alphabet.
/// - [`CliError::IoError`]: stdout or stderr could not be written.
pub fn run(
    scheme: Scheme,
    payloads: &[String],
    append: bool,
    strip: bool,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    execute(
        &mut stdout.lock(),
        &mut stderr.lock(),
        scheme,
        payloads,
        append,
        strip,
        config,
    )
}

fn execute<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    scheme: Scheme,
    payloads: &[String],
    append: bool,
    strip: bool,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let started = Instant::now();

    for raw in payloads {
        let payload = normalize(raw, strip);
        let check = scheme
            .compute(&payload)
            .map_err(|cause| CliError::InvalidPayload {
                scheme,
                payload: payload.clone().into_owned(),
                cause,
            })?;
        let record = CheckRecord {
            scheme,
            payload: &payload,
            check: &check,
        };
        write_check(out, &record, append, config).map_err(stream_error("stdout"))?;
    }

    write_timing(
        err,
        &format!("computed {} check value(s) with {scheme}", payloads.len()),
        started.elapsed(),
        config,
    )
    .map_err(stream_error("stderr"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use checkdigit_core::CheckDigitError;

    use super::*;
    use crate::format::FormatMode;

    fn human() -> FormatterConfig {
        FormatterConfig {
            mode: FormatMode::Human,
            quiet: false,
            verbose: false,
        }
    }

    fn compute(
        scheme: Scheme,
        payloads: &[&str],
        append: bool,
        strip: bool,
    ) -> (Result<(), CliError>, String) {
        let payloads: Vec<String> = payloads.iter().map(|p| (*p).to_owned()).collect();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = execute(&mut out, &mut err, scheme, &payloads, append, strip, &human());
        (result, String::from_utf8(out).expect("utf-8"))
    }

    #[test]
    fn prints_one_check_per_payload() {
        let (result, out) = compute(Scheme::Luhn, &["7992739871", "411111111111111"], false, false);
        result.expect("valid payloads");
        assert_eq!(out, "3\n1\n");
    }

    #[test]
    fn append_prints_full_value() {
        let (result, out) = compute(Scheme::Verhoeff, &["236"], true, false);
        result.expect("valid payload");
        assert_eq!(out, "2363\n");
    }

    #[test]
    fn mod97_10_prints_two_digits() {
        let (result, out) = compute(Scheme::Mod97_10, &["32142829123456987654321611"], false, false);
        result.expect("valid payload");
        assert_eq!(out, "82\n");
    }

    #[test]
    fn strip_removes_group_separators() {
        let (result, out) = compute(Scheme::Mod11_2, &["0000-0002-1694-233"], true, true);
        result.expect("valid payload");
        assert_eq!(out, "000000021694233X\n");
    }

    #[test]
    fn bad_payload_stops_after_earlier_results() {
        let (result, out) = compute(Scheme::Damm, &["572", "57a", "123"], false, false);
        assert_eq!(out, "4\n");
        match result.expect_err("57a is not decimal") {
            CliError::InvalidPayload {
                scheme,
                payload,
                cause,
            } => {
                assert_eq!(scheme, Scheme::Damm);
                assert_eq!(payload, "57a");
                assert_eq!(
                    cause,
                    CheckDigitError::InvalidCharacter {
                        position: 2,
                        character: 'a'
                    }
                );
            }
            other => panic!("expected InvalidPayload, got {other:?}"),
        }
    }

    #[test]
    fn empty_payload_is_an_input_error() {
        let (result, _) = compute(Scheme::Luhn, &[""], false, false);
        assert_eq!(result.expect_err("empty").exit_code(), 2);
    }
}
