/// Result formatting: human-readable and JSON (NDJSON) modes.
///
/// Results go to stdout, one per line. Summaries and timing go to stderr.
///
/// - **Human mode** (default): bare values (`3`, `79927398713`), verdict
///   lines (`valid   79927398713`), and a `2 valid, 1 invalid` summary.
/// - **JSON mode**: each result is a single-line JSON object; the summary is
///   a `{"summary":{...}}` object.
///
/// `quiet` drops summaries and lines for values that passed validation;
/// `verbose` adds timing.
use std::io::Write;
use std::time::Duration;

use checkdigit_core::Scheme;
use serde::Serialize;

use crate::OutputFormat;

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Output format selection, mirroring the CLI `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Plain text.
    Human,
    /// One JSON object per line.
    Json,
}

/// Formatter settings derived from the global CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Human or JSON.
    pub mode: FormatMode,
    /// Suppress summaries and passing verdicts.
    pub quiet: bool,
    /// Emit timing to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        let mode = match format {
            OutputFormat::Human => FormatMode::Human,
            OutputFormat::Json => FormatMode::Json,
        };
        Self {
            mode,
            quiet,
            verbose,
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A computed check value.
#[derive(Debug, Serialize)]
pub struct CheckRecord<'a> {
    /// The scheme that computed the check.
    pub scheme: Scheme,
    /// The payload, after separator stripping.
    pub payload: &'a str,
    /// The check character(s) for `payload`.
    pub check: &'a str,
}

/// The outcome of validating one value.
#[derive(Debug, Serialize)]
pub struct VerdictRecord<'a> {
    /// The scheme the value was checked against.
    pub scheme: Scheme,
    /// The value as checked, check character(s) included.
    pub value: &'a str,
    /// Whether the check character(s) matched.
    pub valid: bool,
}

/// A Base58Check payload and its text form.
#[derive(Debug, Serialize)]
pub struct CodecRecord<'a> {
    /// The payload as lowercase hex, without the suffix.
    pub hex: &'a str,
    /// The Base58Check text.
    pub base58check: &'a str,
}

/// One row of `checkdigit schemes`.
#[derive(Debug, Serialize)]
pub struct SchemeRecord {
    /// The scheme, serialized under its CLI name.
    pub name: Scheme,
    /// Number of check characters the scheme appends.
    pub check_len: usize,
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// Writes a computed check value.
///
/// Human mode prints the check alone, or `payload + check` when `append` is
/// set. JSON mode always includes the full value.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_check<W: Write>(
    writer: &mut W,
    record: &CheckRecord<'_>,
    append: bool,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match config.mode {
        FormatMode::Human if append => writeln!(writer, "{}{}", record.payload, record.check),
        FormatMode::Human => writeln!(writer, "{}", record.check),
        FormatMode::Json => {
            #[derive(Serialize)]
            struct Line<'a> {
                #[serde(flatten)]
                record: &'a CheckRecord<'a>,
                value: String,
            }
            write_json_line(
                writer,
                &Line {
                    record,
                    value: format!("{}{}", record.payload, record.check),
                },
            )
        }
    }
}

/// Writes one validation verdict. In quiet mode passing values are skipped.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_verdict<W: Write>(
    writer: &mut W,
    record: &VerdictRecord<'_>,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet && record.valid {
        return Ok(());
    }
    match config.mode {
        FormatMode::Human => {
            let tag = if record.valid { "valid" } else { "invalid" };
            writeln!(writer, "{tag:<8}{}", record.value)
        }
        FormatMode::Json => write_json_line(writer, record),
    }
}

/// Writes the `validate` summary. Suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    valid: usize,
    invalid: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    match config.mode {
        FormatMode::Human => writeln!(writer, "{valid} valid, {invalid} invalid"),
        FormatMode::Json => writeln!(
            writer,
            r#"{{"summary":{{"valid":{valid},"invalid":{invalid}}}}}"#
        ),
    }
}

/// Writes one side of a Base58Check conversion: the text for `encode`, the
/// hex for `decode`. JSON mode writes both.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_codec<W: Write>(
    writer: &mut W,
    record: &CodecRecord<'_>,
    direction: CodecDirection,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match (config.mode, direction) {
        (FormatMode::Human, CodecDirection::Encode) => writeln!(writer, "{}", record.base58check),
        (FormatMode::Human, CodecDirection::Decode) => writeln!(writer, "{}", record.hex),
        (FormatMode::Json, CodecDirection::Encode | CodecDirection::Decode) => {
            write_json_line(writer, record)
        }
    }
}

/// Which way a [`CodecRecord`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecDirection {
    /// Hex in, Base58Check text out.
    Encode,
    /// Base58Check text in, hex out.
    Decode,
}

/// Writes one supported scheme.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_scheme<W: Write>(
    writer: &mut W,
    record: &SchemeRecord,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match config.mode {
        FormatMode::Human => writeln!(writer, "{}", record.name),
        FormatMode::Json => write_json_line(writer, record),
    }
}

/// Writes the library version.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_version<W: Write>(
    writer: &mut W,
    version: &str,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match config.mode {
        FormatMode::Human => writeln!(writer, "{version}"),
        FormatMode::Json => write_json_line(writer, &serde_json::json!({ "version": version })),
    }
}

/// Writes timing information to `writer` in verbose mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
    match config.mode {
        FormatMode::Human => writeln!(writer, "{label} in {micros}us"),
        FormatMode::Json => write_json_line(
            writer,
            &serde_json::json!({ "timing": { "label": label, "micros": micros } }),
        ),
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Serializes `value` as one line of JSON.
fn write_json_line<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> std::io::Result<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
