/// Error types for the check-digit kernel.
///
/// Compute-style functions (`compute_*`) return [`CheckDigitError`] when the
/// payload contains a symbol outside the scheme's alphabet. Validate-style
/// functions never surface an error; they answer `false` instead.
///
/// The Base58Check codec has its own [`Base58Error`], whose variants fall into
/// three [`Base58ErrorKind`] classes so callers can tell a malformed string
/// from a corrupted one.
use std::fmt;

// ---------------------------------------------------------------------------
// CheckDigitError
// ---------------------------------------------------------------------------

/// Errors produced when a check value is requested for an unusable payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckDigitError {
    /// The payload is empty.
    Empty,

    /// A symbol is not part of the scheme's alphabet.
    InvalidCharacter {
        /// Zero-based byte offset of the offending symbol.
        position: usize,
        /// The offending symbol.
        character: char,
    },

    /// A weighted scheme was called with an empty weight vector.
    EmptyWeights,

    /// The scheme name is not recognised by [`crate::Scheme`].
    UnknownScheme(String),
}

impl fmt::Display for CheckDigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("payload is empty"),
            Self::InvalidCharacter {
                position,
                character,
            } => write!(f, "invalid character {character:?} at position {position}"),
            Self::EmptyWeights => f.write_str("weight vector is empty"),
            Self::UnknownScheme(name) => write!(f, "unknown check-digit scheme {name:?}"),
        }
    }
}

impl std::error::Error for CheckDigitError {}

/// Builds a [`CheckDigitError::InvalidCharacter`] for the byte at `position`
/// of `input`.
pub(crate) fn invalid_character(input: &str, position: usize) -> CheckDigitError {
    CheckDigitError::InvalidCharacter {
        position,
        character: char_at(input, position),
    }
}

/// Returns the `char` that starts at, or contains, byte `position` of `input`.
///
/// Non-ASCII input is reported by its real symbol instead of a lone UTF-8
/// byte.
pub(crate) fn char_at(input: &str, position: usize) -> char {
    input
        .char_indices()
        .take_while(|(start, _)| *start <= position)
        .last()
        .map_or(char::REPLACEMENT_CHARACTER, |(_, c)| c)
}

// ---------------------------------------------------------------------------
// Base58Error
// ---------------------------------------------------------------------------

/// Coarse classification of a [`Base58Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58ErrorKind {
    /// The text is not well-formed Base58 (empty, or unknown symbol).
    Format,
    /// The decoded bytes are too short to carry the 4-byte suffix.
    Length,
    /// The suffix is present but does not match the payload.
    Checksum,
}

/// Errors produced by the Base58Check codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base58Error {
    /// The text to decode is empty.
    Empty,

    /// A character outside the Base58 alphabet was found.
    InvalidCharacter {
        /// Zero-based byte offset of the offending character.
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The decoded byte string is shorter than the 4-byte suffix.
    TooShort {
        /// Number of bytes actually decoded.
        len: usize,
    },

    /// The 4-byte suffix does not match the double SHA-256 of the payload.
    ChecksumMismatch {
        /// Suffix recomputed from the payload.
        expected: [u8; 4],
        /// Suffix carried by the input.
        found: [u8; 4],
    },
}

impl Base58Error {
    /// Returns the class this error belongs to.
    pub fn kind(&self) -> Base58ErrorKind {
        match self {
            Self::Empty | Self::InvalidCharacter { .. } => Base58ErrorKind::Format,
            Self::TooShort { .. } => Base58ErrorKind::Length,
            Self::ChecksumMismatch { .. } => Base58ErrorKind::Checksum,
        }
    }
}

impl fmt::Display for Base58Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty Base58Check text"),
            Self::InvalidCharacter {
                position,
                character,
            } => write!(
                f,
                "invalid Base58 character {character:?} at position {position}"
            ),
            Self::TooShort { len } => write!(
                f,
                "decoded {len} byte(s); at least 4 are required for the checksum"
            ),
            Self::ChecksumMismatch { expected, found } => write!(
                f,
                "checksum mismatch: expected {}, found {}",
                hex4(expected),
                hex4(found)
            ),
        }
    }
}

impl std::error::Error for Base58Error {}

/// Formats a 4-byte suffix as 8 lowercase hex characters.
fn hex4(bytes: &[u8; 4]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
