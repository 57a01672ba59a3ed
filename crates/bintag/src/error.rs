//! Codec error type.

use thiserror::Error;

use crate::kind::Kind;

/// Error type for tag encoding and decoding operations.
///
/// Every failure is returned to the caller; nothing here aborts the process.
/// A decode error means the whole decode is abandoned — no partial tree is
/// ever handed out.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("unknown tag type id: 0x{0:02x}")]
    UnknownTagType(u8),
    #[error("nesting depth exceeded: {depth} > {max}")]
    DepthExceeded { depth: u32, max: u32 },
    #[error("element budget exceeded: {count} > {max}")]
    ElementBudgetExceeded { count: u64, max: u64 },
    #[error("unexpected end of stream")]
    UnexpectedEndOfStream,
    #[error("tag type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: Kind, actual: Kind },
    #[error("tag name too long: {0} bytes")]
    NameTooLong(usize),
    #[error("string payload too long: {0} bytes")]
    StringTooLong(usize),
    #[error("sequence too long: {0} elements")]
    SequenceTooLong(usize),
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<bintag_buffers::BufferError> for TagError {
    fn from(e: bintag_buffers::BufferError) -> Self {
        match e {
            bintag_buffers::BufferError::EndOfBuffer => TagError::UnexpectedEndOfStream,
            bintag_buffers::BufferError::InvalidUtf8 => TagError::InvalidUtf8,
        }
    }
}
