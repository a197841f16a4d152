//! Error types for pair validation and query decoding.

use thiserror::Error;

/// A pair handed to a validated constructor did not have exactly two elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("pair {index} has {len} elements, expected a key and a value")]
pub struct ArityError {
    /// Position of the offending pair in the input.
    pub index: usize,
    /// Number of elements it had.
    pub len: usize,
}

/// Percent-decoding of a key or value failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// `%` not followed by two hex digits. Holds the offending sequence.
    #[error("invalid URL escape {0:?}")]
    InvalidEscape(String),
    /// The escapes decoded to bytes that are not UTF-8. Holds the raw text.
    #[error("escaped text {0:?} does not decode to UTF-8")]
    InvalidUtf8(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error(transparent)]
    Arity(#[from] ArityError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
