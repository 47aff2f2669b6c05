//! Implementation of `checkdigit schemes` and `checkdigit version`.
use std::io::Write;

use checkdigit_core::Scheme;

use super::stream_error;
use crate::error::CliError;
use crate::format::{FormatterConfig, SchemeRecord, write_scheme, write_version};

/// Lists every supported scheme name, one per line.
///
/// # Errors
///
/// [`CliError::IoError`] if stdout cannot be written.
pub fn schemes(config: &FormatterConfig) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    schemes_to(&mut stdout.lock(), config)
}

/// Prints the checkdigit-core library version.
///
/// # Errors
///
/// [`CliError::IoError`] if stdout cannot be written.
pub fn version(config: &FormatterConfig) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    write_version(&mut stdout.lock(), checkdigit_core::version(), config)
        .map_err(stream_error("stdout"))
}

fn schemes_to<W: Write>(out: &mut W, config: &FormatterConfig) -> Result<(), CliError> {
    for scheme in Scheme::ALL {
        let record = SchemeRecord {
            name: scheme,
            check_len: scheme.check_len(),
        };
        write_scheme(out, &record, config).map_err(stream_error("stdout"))?;
    }
    Ok(())
}
