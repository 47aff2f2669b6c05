//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use checkdigit_core::Scheme;
use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` writes one plain-text result per line. `Json` writes one JSON
/// object per line (NDJSON) on stdout, and summaries as JSON on stderr.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (default).
    Human,
    /// Newline-delimited JSON.
    Json,
}

/// All top-level subcommands exposed by the `checkdigit` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the check characters for one or more payloads.
    Compute {
        /// Check-digit scheme (see `checkdigit schemes`).
        #[arg(value_name = "SCHEME")]
        scheme: Scheme,
        /// Payloads without their check characters.
        #[arg(value_name = "PAYLOAD", num_args = 1.., required = true)]
        payloads: Vec<String>,
        /// Print the payload followed by its check characters.
        #[arg(long)]
        append: bool,
    },

    /// Validate values that end in their check characters.
    ///
    /// Exits 1 if any value is invalid.
    Validate {
        /// Check-digit scheme (see `checkdigit schemes`).
        #[arg(value_name = "SCHEME")]
        scheme: Scheme,
        /// Values including their check characters.
        #[arg(value_name = "VALUE")]
        values: Vec<String>,
        /// Also validate each non-empty line of FILE, or `-` for stdin.
        #[arg(long, short = 'i', value_name = "FILE")]
        input: Option<PathOrStdin>,
    },

    /// Encode hex bytes as Base58Check.
    Encode {
        /// Payload bytes as hex (e.g. `00f54a58...`).
        #[arg(value_name = "HEX")]
        hex: String,
    },

    /// Decode Base58Check text and print the payload as hex.
    ///
    /// Exits 1 on a checksum mismatch and 2 on malformed text.
    Decode {
        /// Base58Check text.
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// List the supported check-digit schemes.
    Schemes,

    /// Print the checkdigit-core library version.
    Version,
}

/// Root CLI struct for the `checkdigit` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "checkdigit",
    version,
    about = "Compute and validate check digits",
    long_about = "Computes and validates check characters (Luhn, GS1, Damm, Verhoeff,\n\
                  ISO 7064) and encodes or decodes Base58Check strings."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    ///
    /// Can also be set via the `CHECKDIGIT_FORMAT` environment variable.
    #[arg(
        long,
        short = 'f',
        default_value = "human",
        global = true,
        env = "CHECKDIGIT_FORMAT"
    )]
    pub format: OutputFormat,

    /// Suppress summaries and valid results; only failures are printed
    /// (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print timing and counts to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Remove whitespace and `-` from payloads and values before checking.
    #[arg(long, short = 's', global = true)]
    pub strip_separators: bool,

    /// Maximum `--input` size in bytes.
    ///
    /// Can also be set via the `CHECKDIGIT_MAX_INPUT_SIZE` environment
    /// variable. The CLI flag takes precedence. Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "CHECKDIGIT_MAX_INPUT_SIZE",
        default_value = "16777216"
    )]
    pub max_input_size: u64,
}
