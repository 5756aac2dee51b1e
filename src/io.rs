//! Byte source and byte sink collaborators
//!
//! The encoder reads its input by offset, so a source is free to fail
//! partway through (for example when copying out of another address space).

use crate::error::{SinkFault, SourceReadFault};

/// Random-access input for one encode operation
pub trait ByteSource {
    /// Total number of bytes in the input
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the byte at `index`
    fn read_byte(&mut self, index: usize) -> Result<u8, SourceReadFault>;
}

impl ByteSource for &[u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn read_byte(&mut self, index: usize) -> Result<u8, SourceReadFault> {
        self.get(index).copied().ok_or(SourceReadFault { index })
    }
}

/// Receiver of drained transcript bytes
///
/// `accept` is all-or-nothing: on error none of `bytes` is taken.
pub trait ByteSink {
    fn accept(&mut self, bytes: &[u8]) -> Result<(), SinkFault>;
}

impl<const N: usize> ByteSink for heapless::Vec<u8, N> {
    fn accept(&mut self, bytes: &[u8]) -> Result<(), SinkFault> {
        self.extend_from_slice(bytes)
            .map_err(|()| SinkFault { len: bytes.len() })
    }
}

/// Sink writing into a caller-provided buffer
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    filled: usize,
}

impl<'a> SliceSink<'a> {
    pub const fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, filled: 0 }
    }

    /// Number of bytes written so far
    pub const fn filled(&self) -> usize {
        self.filled
    }

    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.filled
    }
}

impl ByteSink for SliceSink<'_> {
    fn accept(&mut self, bytes: &[u8]) -> Result<(), SinkFault> {
        let end = self.filled + bytes.len();
        let Some(target) = self.buf.get_mut(self.filled..end) else {
            return Err(SinkFault { len: bytes.len() });
        };
        target.copy_from_slice(bytes);
        self.filled = end;
        Ok(())
    }
}
