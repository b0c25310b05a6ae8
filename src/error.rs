//! Error types for RTF writing.
//!
//! Each variant identifies the stage that failed. A failed write is not
//! rolled back: the stream may be left partially written, and it is up to
//! the caller to discard it.

use std::io;
use thiserror::Error;

/// Result type for RTF operations.
pub type RtfResult<T> = Result<T, RtfError>;

/// RTF writing errors.
#[derive(Error, Debug)]
pub enum RtfError {
    /// The output stream could not be created
    #[error("Could not create RTF stream: {0}")]
    Open(#[source] io::Error),

    /// The closing sequence could not be written or flushed
    #[error("Could not close RTF stream: {0}")]
    Close(#[source] io::Error),

    /// The document header could not be written
    #[error("Could not write RTF header: {0}")]
    Header(#[source] io::Error),

    /// The document formatting block could not be written
    #[error("Could not write document formatting: {0}")]
    DocumentFormat(#[source] io::Error),

    /// A section formatting block could not be written
    #[error("Could not write section formatting: {0}")]
    SectionFormat(#[source] io::Error),

    /// A paragraph block could not be written
    #[error("Could not write paragraph formatting: {0}")]
    ParagraphFormat(#[source] io::Error),

    /// A table row or cell block could not be written
    #[error("Could not write table: {0}")]
    Table(#[source] io::Error),

    /// Content was emitted before the document was opened
    #[error("RTF document is not open")]
    NotOpen,

    /// An operation was called in a state that does not allow it
    #[error("Cannot {operation} while {state}")]
    OutOfSequence {
        /// The rejected operation
        operation: &'static str,
        /// The writer state at the time of the call
        state: &'static str,
    },

    /// A format preset could not be serialized or deserialized
    #[error("Invalid format preset: {0}")]
    Config(String),
}

impl RtfError {
    /// Numeric status code for this error.
    ///
    /// Stage errors keep the classic RTF library codes (`0x0001` open through
    /// `0x0008` table); the sequencing and preset errors follow on from them.
    pub fn code(&self) -> u16 {
        match self {
            RtfError::Open(_) => 0x0001,
            RtfError::Close(_) => 0x0002,
            RtfError::Header(_) => 0x0003,
            RtfError::DocumentFormat(_) => 0x0004,
            RtfError::SectionFormat(_) => 0x0005,
            RtfError::ParagraphFormat(_) => 0x0006,
            RtfError::Table(_) => 0x0008,
            RtfError::NotOpen => 0x0009,
            RtfError::OutOfSequence { .. } => 0x000a,
            RtfError::Config(_) => 0x000b,
        }
    }
}

/// Status value for success in the classic numeric API; never returned by
/// [`RtfError::code`].
pub const RTF_SUCCESS: u16 = 0x1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stage_specific() {
        let io = || io::Error::from(io::ErrorKind::WriteZero);
        let codes = [
            RtfError::Open(io()).code(),
            RtfError::Close(io()).code(),
            RtfError::Header(io()).code(),
            RtfError::DocumentFormat(io()).code(),
            RtfError::SectionFormat(io()).code(),
            RtfError::ParagraphFormat(io()).code(),
            RtfError::Table(io()).code(),
        ];
        assert_eq!(codes, [1, 2, 3, 4, 5, 6, 8]);
        assert!(!codes.contains(&RTF_SUCCESS));
    }

    #[test]
    fn test_display() {
        let err = RtfError::OutOfSequence {
            operation: "start a table cell",
            state: "no table row is open",
        };
        assert_eq!(err.to_string(), "Cannot start a table cell while no table row is open");

        let err = RtfError::Header(io::Error::from(io::ErrorKind::WriteZero));
        assert!(err.to_string().starts_with("Could not write RTF header"));
    }
}
