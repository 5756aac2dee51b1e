//! Error types
//!
//! No error is fatal: the encoder, the transcript and the device all stay
//! usable after any of these is returned.

use thiserror::Error;

/// The byte source could not supply a byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unable to read input byte at offset {index}")]
pub struct SourceReadFault {
    pub index: usize,
}

/// The byte sink refused transcript bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("transcript sink refused {len} bytes")]
pub struct SinkFault {
    pub len: usize,
}

/// The transcript is full and configured to reject new bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("transcript full, rejected {byte:#04x}")]
pub struct TranscriptFull {
    pub byte: u8,
}

/// Failure of a single encode operation
///
/// Output already produced before the failure is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error(transparent)]
    SourceRead(#[from] SourceReadFault),

    #[error(transparent)]
    TranscriptFull(#[from] TranscriptFull),
}

/// A write request could not be queued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("request of {len} bytes exceeds the {max} byte limit")]
    TooLong { len: usize, max: usize },

    #[error("request queue full")]
    QueueFull,
}
