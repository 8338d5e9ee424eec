//! Error types shared by every layer of the volume reader

use crate::strings::CodecError;
use std::io;
use thiserror::Error;

/// Errors that can occur while interpreting an HFS-family volume
///
/// Absence of a catalog entry is not an error for lookup-style calls; those
/// return `Ok(None)`. `NotFound` is only produced where a caller asked for
/// something that must exist, such as a path.
#[derive(Debug, Error)]
pub enum HfsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid {format} signature: expected 0x{expected:04X}, found 0x{actual:04X}")]
    BadSignature {
        format: &'static str,
        expected: u16,
        actual: u16,
    },

    #[error("Corrupt structure: {0}")]
    Corrupt(String),

    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Not a file: {0}")]
    NotAFile(String),

    #[error("End of fork: offset {offset} is beyond fork length {length}")]
    EndOfFork { offset: u64, length: u64 },

    #[error("Encoding error: {0}")]
    Encoding(#[from] CodecError),

    #[error("Invalid usage: {0}")]
    Usage(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HfsError>;

impl HfsError {
    /// Shorthand for a corruption error with context
    pub fn corrupt(message: impl Into<String>) -> Self {
        HfsError::Corrupt(message.into())
    }

    /// Shorthand for a usage error with context
    pub fn usage(message: impl Into<String>) -> Self {
        HfsError::Usage(message.into())
    }

    /// I/O error for data that ends before the requested bytes
    pub fn unexpected_eof(message: impl Into<String>) -> Self {
        HfsError::Io(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, message.into()))
    }

    /// True for errors caused by damaged or unrecognized on-disk data
    pub fn is_format_error(&self) -> bool {
        matches!(self, HfsError::BadSignature { .. } | HfsError::Corrupt(_))
    }
}

impl From<HfsError> for io::Error {
    fn from(err: HfsError) -> Self {
        match err {
            HfsError::Io(inner) => inner,
            other => {
                let kind = match &other {
                    HfsError::EndOfFork { .. } => io::ErrorKind::UnexpectedEof,
                    HfsError::NotFound(_) => io::ErrorKind::NotFound,
                    HfsError::Usage(_) => io::ErrorKind::InvalidInput,
                    _ => io::ErrorKind::InvalidData,
                };
                io::Error::new(kind, other)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_round_trip_keeps_kind() {
        let err = HfsError::from(io::Error::new(io::ErrorKind::UnexpectedEof, "short"));
        let back: io::Error = err.into();
        assert_eq!(back.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_format_errors_are_classified() {
        let sig = HfsError::BadSignature {
            format: "HFS",
            expected: 0x4244,
            actual: 0,
        };
        assert!(sig.is_format_error());
        assert!(HfsError::corrupt("bad node").is_format_error());
        assert!(!HfsError::NotFound("x".into()).is_format_error());
        assert!(sig.to_string().contains("0x4244"));
    }
}
