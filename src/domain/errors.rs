//! Domain error types
//!
//! Every variant is a reason an input failed the ISBN contract. Callers that
//! only care about "valid or not" can treat all of them as one kind.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IsbnError {
    /// Wrong number of characters for the claimed format
    #[error("Invalid ISBN: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// A character that is not allowed at this position
    #[error("Invalid ISBN: unexpected character {found:?} at position {position}")]
    InvalidCharacter { position: usize, found: char },
    /// ISBN-13 that does not start with the 978 Bookland prefix
    #[error("Invalid ISBN: ISBN-13 must start with 978")]
    InvalidPrefix,
    /// Well-formed, but the check character does not match the digits
    #[error("Invalid ISBN: check character is {found:?}, expected {expected:?}")]
    ChecksumMismatch { expected: char, found: char },
    /// Checksum input was not an all-digit stem of the right length
    #[error("Malformed stem: expected exactly {expected_len} ASCII digits")]
    MalformedStem { expected_len: usize },
    /// Neither 10 nor 13 characters, so the format can't be guessed
    #[error("Unknown ISBN format: {length} characters (expected 10 or 13)")]
    UnknownFormat { length: usize },
}

impl IsbnError {
    /// Short machine-readable reason, used in reports.
    pub fn reason(&self) -> &'static str {
        match self {
            IsbnError::InvalidLength { .. } => "invalid_length",
            IsbnError::InvalidCharacter { .. } => "invalid_character",
            IsbnError::InvalidPrefix => "invalid_prefix",
            IsbnError::ChecksumMismatch { .. } => "checksum_mismatch",
            IsbnError::MalformedStem { .. } => "malformed_stem",
            IsbnError::UnknownFormat { .. } => "unknown_format",
        }
    }
}
