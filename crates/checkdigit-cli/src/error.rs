/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `checkdigit` binary.
/// Every variant maps to a stable exit code (1 or 2) via
/// [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The input could not be read, or it is
///   not something the requested operation accepts (bad hex, a character
///   outside the scheme's alphabet, malformed Base58).
/// - Exit code **1**: logical failure. The input was well-formed but did not
///   check out (an invalid check digit, a Base58Check checksum mismatch).
use std::fmt;
use std::path::PathBuf;

use checkdigit_core::{Base58Error, Base58ErrorKind, CheckDigitError, Scheme};

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `checkdigit` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// An `--input` file could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read an `--input` file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-input-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, otherwise the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (`None` for stdin).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, otherwise the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// The stream or path involved.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// `validate` was given neither values nor `--input`, or the input held
    /// no non-empty lines.
    NoInput,

    /// A payload cannot be processed by the requested scheme.
    InvalidPayload {
        /// The scheme that rejected the payload.
        scheme: Scheme,
        /// The payload as given (after separator stripping).
        payload: String,
        /// The kernel's error.
        cause: CheckDigitError,
    },

    /// The `encode` argument is not valid hex.
    InvalidHex {
        /// Why the hex decoder rejected it.
        detail: String,
    },

    /// Base58Check encoding or decoding failed before the checksum stage.
    MalformedBase58 {
        /// The kernel's error.
        cause: Base58Error,
    },

    // --- Exit code 1: logical failures ---
    /// One or more values failed validation.
    ///
    /// The per-value verdicts have already been printed.
    InvalidValues {
        /// Number of values that failed.
        invalid: usize,
        /// Number of values checked.
        total: usize,
    },

    /// Base58Check text decoded but its integrity suffix did not match.
    ChecksumMismatch {
        /// The kernel's error.
        cause: Base58Error,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2`: input failure (unreadable input, bad hex, bad characters).
    /// - `1`: logical failure (invalid value, checksum mismatch).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::NoInput
            | Self::InvalidPayload { .. }
            | Self::InvalidHex { .. }
            | Self::MalformedBase58 { .. } => 2,

            Self::InvalidValues { .. } | Self::ChecksumMismatch { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: input too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: input too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::NoInput => "error: nothing to validate: pass VALUE arguments or --input".to_owned(),
            Self::InvalidPayload {
                scheme,
                payload,
                cause,
            } => {
                format!("error: {scheme} cannot check \"{payload}\": {cause}")
            }
            Self::InvalidHex { detail } => format!("error: invalid hex: {detail}"),
            Self::MalformedBase58 { cause } => format!("error: malformed Base58Check: {cause}"),
            Self::InvalidValues { invalid, total } => {
                format!("error: {invalid} of {total} value(s) failed validation")
            }
            Self::ChecksumMismatch { cause } => format!("error: {cause}"),
        }
    }
}

impl From<Base58Error> for CliError {
    /// Routes checksum failures to exit code 1 and everything else to 2.
    fn from(cause: Base58Error) -> Self {
        match cause.kind() {
            Base58ErrorKind::Checksum => Self::ChecksumMismatch { cause },
            Base58ErrorKind::Format | Base58ErrorKind::Length => Self::MalformedBase58 { cause },
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    // ── exit_code ────────────────────────────────────────────────────────────

    #[test]
    fn read_failures_are_exit_2() {
        let errors = [
            CliError::FileNotFound {
                path: PathBuf::from("ids.txt"),
            },
            CliError::PermissionDenied {
                path: PathBuf::from("/root/ids.txt"),
            },
            CliError::FileTooLarge {
                source: "-".to_owned(),
                limit: 10,
                actual: None,
            },
            CliError::InvalidUtf8 {
                source: "ids.txt".to_owned(),
                byte_offset: 3,
            },
            CliError::StdinReadError {
                detail: "broken pipe".to_owned(),
            },
            CliError::NoInput,
        ];
        for e in errors {
            assert_eq!(e.exit_code(), 2, "{e}");
        }
    }

    #[test]
    fn invalid_payload_is_exit_2() {
        let e = CliError::InvalidPayload {
            scheme: Scheme::Luhn,
            payload: "12a".to_owned(),
            cause: CheckDigitError::InvalidCharacter {
                position: 2,
                character: 'a',
            },
        };
        assert_eq!(e.exit_code(), 2);
        let msg = e.message();
        assert!(msg.contains("luhn"), "message: {msg}");
        assert!(msg.contains("12a"), "message: {msg}");
        assert!(msg.contains("position 2"), "message: {msg}");
    }

    #[test]
    fn invalid_values_is_exit_1() {
        let e = CliError::InvalidValues {
            invalid: 2,
            total: 5,
        };
        assert_eq!(e.exit_code(), 1);
        assert!(e.message().contains("2 of 5"));
    }

    #[test]
    fn base58_errors_split_by_kind() {
        let mismatch: CliError = Base58Error::ChecksumMismatch {
            expected: [1, 2, 3, 4],
            found: [0, 0, 0, 0],
        }
        .into();
        assert_eq!(mismatch.exit_code(), 1);

        let short: CliError = Base58Error::TooShort { len: 1 }.into();
        assert_eq!(short.exit_code(), 2);

        let bad: CliError = Base58Error::InvalidCharacter {
            position: 0,
            character: '0',
        }
        .into();
        assert_eq!(bad.exit_code(), 2);
    }

    // ── message content ──────────────────────────────────────────────────────

    #[test]
    fn file_too_large_with_actual_mentions_sizes() {
        let e = CliError::FileTooLarge {
            source: "big.txt".to_owned(),
            limit: 1_000_000,
            actual: Some(2_000_000),
        };
        let msg = e.message();
        assert!(msg.contains("2000000"), "message: {msg}");
        assert!(msg.contains("1000000"), "message: {msg}");
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("x.txt"),
        };
        assert_eq!(format!("{e}"), e.message());
    }

    #[test]
    fn error_trait_is_implemented() {
        let e: Box<dyn std::error::Error> = Box::new(CliError::NoInput);
        assert!(!e.to_string().is_empty());
    }
}
