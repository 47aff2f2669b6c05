/// Command module for the `checkdigit` CLI.
///
/// Each submodule implements one or two subcommands. The public `run`-style
/// functions lock stdout/stderr and delegate to a writer-generic helper so
/// the logic can be tested against in-memory buffers.
use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::CliError;

pub mod codec;
pub mod compute;
pub mod info;
pub mod validate;

// ---------------------------------------------------------------------------
// Separator stripping
//
// The pattern is a literal; Regex::new cannot fail for it. The fallback only
// exists because the workspace bans unwrap() and expect().
// ---------------------------------------------------------------------------

/// Matches runs of whitespace and `-`.
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s\-]+").unwrap_or_else(|_| {
        Regex::new("a^").unwrap_or_else(|_| unreachable!("regex engine broken"))
    })
});

/// Returns `input` with separators removed when `strip` is set.
pub fn normalize(input: &str, strip: bool) -> Cow<'_, str> {
    if strip {
        SEPARATOR_RE.replace_all(input, "")
    } else {
        Cow::Borrowed(input)
    }
}

/// Maps a write failure on `stream` to a [`CliError::IoError`].
pub fn stream_error(stream: &'static str) -> impl Fn(std::io::Error) -> CliError {
    move |e| CliError::IoError {
        source: stream.to_owned(),
        detail: e.to_string(),
    }
}
