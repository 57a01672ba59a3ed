//! bintag-buffers — byte-level plumbing for the bintag wire codec.
//!
//! Provides:
//! - [`Reader`] — bounds-checked big-endian cursor over a byte slice
//! - [`Writer`] — auto-growing big-endian buffer writer
//! - [`BufferError`] — the two ways a raw read can fail

use thiserror::Error;

pub mod reader;
pub mod writer;

pub use reader::Reader;
pub use writer::Writer;

/// Error type for raw buffer reads.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("end of buffer")]
    EndOfBuffer,
    #[error("invalid UTF-8")]
    InvalidUtf8,
}
