//! Implementation of `checkdigit validate <SCHEME> [VALUE]... [--input FILE]`.
//!
//! Validates every VALUE argument, then every non-empty line of `--input`.
//! Verdicts go to stdout, the summary to stderr.
//!
//! Exit codes:
//! - 0 = every value is valid
//! - 1 = at least one value is invalid
//! - 2 = nothing to validate, or the input could not be read
use std::io::Write;
use std::time::Instant;

use checkdigit_core::Scheme;

use super::{normalize, stream_error};
use crate::PathOrStdin;
use crate::error::CliError;
use crate::format::{FormatterConfig, VerdictRecord, write_summary, write_timing, write_verdict};
use crate::io::{non_empty_lines, read_input};

/// Runs the `validate` command.
///
/// # Errors
///
/// - [`CliError::InvalidValues`]: one or more values failed.
/// - [`CliError::NoInput`]: no values were given.
/// - Any read error from [`read_input`].
pub fn run(
    scheme: Scheme,
    values: &[String],
    input: Option<&PathOrStdin>,
    strip: bool,
    max_input_size: u64,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let content = input
        .map(|source| read_input(source, max_input_size))
        .transpose()?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    execute(
        &mut stdout.lock(),
        &mut stderr.lock(),
        scheme,
        values,
        content.as_deref(),
        strip,
        config,
    )
}

fn execute<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    scheme: Scheme,
    values: &[String],
    content: Option<&str>,
    strip: bool,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let started = Instant::now();
    let candidates = values
        .iter()
        .map(String::as_str)
        .chain(content.into_iter().flat_map(non_empty_lines));

    let mut valid = 0usize;
    let mut invalid = 0usize;
    for raw in candidates {
        let value = normalize(raw, strip);
        let ok = scheme.validate(&value);
        if ok {
            valid += 1;
        } else {
            invalid += 1;
        }
        let record = VerdictRecord {
            scheme,
            value: &value,
            valid: ok,
        };
        write_verdict(out, &record, config).map_err(stream_error("stdout"))?;
    }

    let total = valid + invalid;
    if total == 0 {
        return Err(CliError::NoInput);
    }

    write_summary(err, valid, invalid, config).map_err(stream_error("stderr"))?;
    write_timing(
        err,
        &format!("validated {total} value(s) with {scheme}"),
        started.elapsed(),
        config,
    )
    .map_err(stream_error("stderr"))?;

    if invalid > 0 {
        Err(CliError::InvalidValues { invalid, total })
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use super::*;
    use crate::format::FormatMode;

    struct Outcome {
        result: Result<(), CliError>,
        stdout: String,
        stderr: String,
    }

    fn validate(
        scheme: Scheme,
        values: &[&str],
        content: Option<&str>,
        strip: bool,
        config: &FormatterConfig,
    ) -> Outcome {
        let values: Vec<String> = values.iter().map(|v| (*v).to_owned()).collect();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = execute(&mut out, &mut err, scheme, &values, content, strip, config);
        Outcome {
            result,
            stdout: String::from_utf8(out).expect("utf-8"),
            stderr: String::from_utf8(err).expect("utf-8"),
        }
    }

    fn config(mode: FormatMode, quiet: bool) -> FormatterConfig {
        FormatterConfig {
            mode,
            quiet,
            verbose: false,
        }
    }

    #[test]
    fn all_valid_exits_ok() {
        let o = validate(
            Scheme::Luhn,
            &["79927398713", "4111111111111111"],
            None,
            false,
            &config(FormatMode::Human, false),
        );
        o.result.expect("both valid");
        assert_eq!(o.stdout, "valid   79927398713\nvalid   4111111111111111\n");
        assert_eq!(o.stderr, "2 valid, 0 invalid\n");
    }

    #[test]
    fn one_invalid_value_is_a_logical_failure() {
        let o = validate(
            Scheme::Luhn,
            &["79927398713", "79927398714"],
            None,
            false,
            &config(FormatMode::Human, false),
        );
        match o.result.expect_err("one invalid") {
            CliError::InvalidValues { invalid, total } => {
                assert_eq!((invalid, total), (1, 2));
            }
            other => panic!("expected InvalidValues, got {other:?}"),
        }
        assert!(o.stdout.contains("invalid 79927398714"), "stdout: {}", o.stdout);
    }

    #[test]
    fn input_lines_follow_arguments() {
        let o = validate(
            Scheme::Damm,
            &["5724"],
            Some("\n1234567894\n\n  5725  \n"),
            false,
            &config(FormatMode::Human, false),
        );
        assert!(o.result.is_err());
        assert_eq!(
            o.stdout,
            "valid   5724\nvalid   1234567894\ninvalid 5725\n"
        );
        assert_eq!(o.stderr, "2 valid, 1 invalid\n");
    }

    #[test]
    fn nothing_to_validate_is_an_input_failure() {
        let o = validate(
            Scheme::Verhoeff,
            &[],
            Some("\n   \n"),
            false,
            &config(FormatMode::Human, false),
        );
        let e = o.result.expect_err("no input");
        assert!(matches!(e, CliError::NoInput));
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn quiet_prints_only_failures() {
        let o = validate(
            Scheme::Mod11_2,
            &["0000-0002-1694-233X", "0000-0002-1694-2330"],
            None,
            true,
            &config(FormatMode::Human, true),
        );
        assert!(o.result.is_err());
        assert_eq!(o.stdout, "invalid 0000000216942330\n");
        assert!(o.stderr.is_empty());
    }

    #[test]
    fn json_mode_emits_ndjson() {
        let o = validate(
            Scheme::Mod37_36,
            &["A12425GABC1234002M"],
            None,
            false,
            &config(FormatMode::Json, false),
        );
        o.result.expect("valid GRid");
        let v: serde_json::Value = serde_json::from_str(o.stdout.trim()).expect("JSON");
        assert_eq!(v["scheme"], "mod37-36");
        assert_eq!(v["value"], "A12425GABC1234002M");
        assert_eq!(v["valid"], true);
        let s: serde_json::Value = serde_json::from_str(o.stderr.trim()).expect("JSON");
        assert_eq!(s["summary"]["valid"], 1);
    }
}
