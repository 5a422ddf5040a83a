//! Error types for conversion operations.
//!
//! This module provides the [`ConversionError`] type for all conversion
//! operations and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all character conversion operations.
///
/// The four variants mirror the externally observable failure kinds of the
/// POSIX `iconv` contract: `EINVAL`, `EILSEQ`, `E2BIG`, and `ENOMEM`.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// A contract violation by the caller, such as an unknown encoding name
    /// or an out-of-range lookup position.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed input bytes for the declared source encoding. This covers
    /// truncated sequences mid-stream, bad escape grammar, unknown charset
    /// finalizers, unassigned code points, and UTF surrogate violations.
    #[error("Illegal byte sequence: {0}")]
    IllegalSequence(String),

    /// The destination buffer has insufficient space for the next encoded
    /// character. The converter parks the decoded character so the caller
    /// can retry with a larger buffer without re-decoding.
    #[error("Insufficient space in the destination buffer")]
    OutputTooBig,

    /// An internal buffer allocation failed.
    #[error("Out of memory while growing an internal buffer")]
    OutOfMemory,
}

impl From<smallvec::CollectionAllocErr> for ConversionError {
    fn from(_: smallvec::CollectionAllocErr) -> Self {
        ConversionError::OutOfMemory
    }
}

/// Convenience type alias for [`std::result::Result`] with [`ConversionError`].
pub type Result<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConversionError::InvalidArgument("unknown encoding: KOI8-R".to_string());
        assert!(err.to_string().contains("KOI8-R"));

        let err = ConversionError::OutputTooBig;
        assert!(err.to_string().contains("destination buffer"));
    }
}
