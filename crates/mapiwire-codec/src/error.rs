//! Error types for wire-format decoding.

use crate::types::RequestType;

/// Result type alias for decoding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Decoding error types.
///
/// A decoder never returns a partially filled record: any of these errors
/// aborts the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A read would consume bytes past the end of the buffer.
    #[error("Read of {requested} bytes at offset {offset} exceeds buffer ({available} bytes left)")]
    OutOfBounds {
        /// Cursor offset where the read was attempted.
        offset: usize,
        /// Number of bytes the read needed.
        requested: usize,
        /// Number of bytes left in the buffer at that offset.
        available: usize,
    },

    /// A length prefix declares a size the protocol does not allow.
    #[error("Malformed {field} length: {declared} exceeds limit {limit}")]
    MalformedLength {
        /// Name of the length-prefixed field.
        field: &'static str,
        /// Length declared on the wire.
        declared: u32,
        /// Configured maximum.
        limit: u32,
    },

    /// A string property contains an unpaired UTF-16 surrogate.
    #[error("Invalid UTF-16 string at offset {offset}")]
    InvalidUtf16 {
        /// Offset of the first code unit of the string.
        offset: usize,
    },

    /// Unrecognized `X-RequestType` value.
    #[error("Unknown request type: {0}")]
    UnknownRequestType(String),

    /// Outcome name other than `success` or `failure`.
    #[error("Unknown response outcome: {0}")]
    UnknownOutcome(String),

    /// Property tag with no registered codec.
    #[error("Unknown property tag: {0:#010x}")]
    UnknownPropertyTag(u32),

    /// No body layout is registered for this request type and outcome.
    #[error("No success body layout registered for {0}")]
    UnsupportedLayout(RequestType),
}

impl Error {
    /// Returns true if the input was shorter than a field required.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
