//! Transcript buffer
//!
//! A bounded byte FIFO shared between the encoder (the only producer) and an
//! independent reader. Built on `critical-section` and `heapless::Deque`, so
//! it can live in a `static` and be used from threads or interrupts. Neither
//! side ever waits: pushing to a full buffer applies the [`OverflowPolicy`],
//! draining an empty one moves zero bytes. The critical section only guards
//! the queue itself; sinks run outside it.

use core::cell::RefCell;

use critical_section::Mutex;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Deque;

use crate::error::{SinkFault, TranscriptFull};
use crate::io::ByteSink;

/// Default transcript capacity in bytes
pub const DEFAULT_TRANSCRIPT_SIZE: usize = 256;

/// What happens to a byte pushed into a full transcript
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Discard the new byte
    #[default]
    DropNewest,
    /// Discard the oldest unread byte to make room
    DropOldest,
    /// Refuse the byte and report [`TranscriptFull`] to the encoder
    Reject,
}

#[derive(Debug)]
struct State<const SIZE: usize> {
    queue: Deque<u8, SIZE>,
    dropped: usize,
    // bytes pushed out of the front by DropOldest
    evicted: usize,
}

/// Bounded FIFO of transcript characters
pub struct Transcript<const SIZE: usize> {
    inner: Mutex<RefCell<State<SIZE>>>,
    policy: OverflowPolicy,
}

impl<const SIZE: usize> Transcript<SIZE> {
    /// Create an empty transcript that drops new bytes when full
    pub const fn new() -> Self {
        Self::with_policy(OverflowPolicy::DropNewest)
    }

    /// Create an empty transcript with an explicit overflow policy
    pub const fn with_policy(policy: OverflowPolicy) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(State {
                queue: Deque::new(),
                dropped: 0,
                evicted: 0,
            })),
            policy,
        }
    }

    pub const fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    pub const fn capacity(&self) -> usize {
        SIZE
    }

    /// Get the producer handle
    pub const fn writer(&self) -> TranscriptWriter<'_, SIZE> {
        TranscriptWriter { transcript: self }
    }

    /// Get the consumer handle
    pub const fn reader(&self) -> TranscriptReader<'_, SIZE> {
        TranscriptReader { transcript: self }
    }

    /// Append one byte
    ///
    /// Only fails under [`OverflowPolicy::Reject`]. The other policies
    /// succeed and count the discarded byte in [`Self::dropped`].
    pub fn push(&self, byte: u8) -> Result<(), TranscriptFull> {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            if !state.queue.is_full() {
                let _ = state.queue.push_back(byte);
                return Ok(());
            }

            match self.policy {
                OverflowPolicy::DropNewest => {
                    state.dropped += 1;
                    #[cfg(feature = "esp32-log")]
                    println!("[Transcript.push] full, dropping {:?}", byte as char);
                    Ok(())
                }
                OverflowPolicy::DropOldest => {
                    let _oldest = state.queue.pop_front();
                    let _ = state.queue.push_back(byte);
                    state.dropped += 1;
                    state.evicted += 1;
                    #[cfg(feature = "esp32-log")]
                    println!("[Transcript.push] full, dropping {:?}", _oldest.map(char::from));
                    Ok(())
                }
                OverflowPolicy::Reject => {
                    #[cfg(feature = "esp32-log")]
                    println!("[Transcript.push] full, rejecting {:?}", byte as char);
                    Err(TranscriptFull { byte })
                }
            }
        })
    }

    /// Move up to `max` bytes, oldest first, into `sink`
    ///
    /// Returns the number of bytes moved. If the sink refuses them, nothing
    /// is removed from the transcript.
    ///
    /// The bytes are copied out under the lock and handed to the sink after
    /// it is released, so a slow sink never stalls [`Self::push`]. Bytes that
    /// [`OverflowPolicy::DropOldest`] evicted while the sink ran are not
    /// popped a second time.
    ///
    /// Meant for a single consumer. Two concurrent drains may hand the same
    /// bytes to both sinks.
    pub fn drain_to<S: ByteSink + ?Sized>(
        &self,
        sink: &mut S,
        max: usize,
    ) -> Result<usize, SinkFault> {
        let mut chunk = [0u8; SIZE];
        let (count, evicted) = critical_section::with(|cs| {
            let state = self.inner.borrow(cs).borrow();
            let count = max.min(state.queue.len());
            for (slot, byte) in chunk.iter_mut().zip(state.queue.iter()).take(count) {
                *slot = *byte;
            }
            (count, state.evicted)
        });
        if count == 0 {
            return Ok(0);
        }

        if let Err(fault) = sink.accept(&chunk[..count]) {
            #[cfg(feature = "esp32-log")]
            println!("[Transcript.drain_to] sink refused {} bytes", count);
            return Err(fault);
        }

        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            let gone = state.evicted.wrapping_sub(evicted);
            for _ in 0..count.saturating_sub(gone) {
                state.queue.pop_front();
            }
        });
        Ok(count)
    }

    /// Number of unread bytes
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().queue.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().queue.is_full())
    }

    /// Total number of bytes discarded by the overflow policy
    pub fn dropped(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().dropped)
    }
}

impl<const SIZE: usize> Default for Transcript<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle for a [`Transcript`]
#[derive(Clone, Copy)]
pub struct TranscriptWriter<'a, const SIZE: usize> {
    transcript: &'a Transcript<SIZE>,
}

impl<const SIZE: usize> TranscriptWriter<'_, SIZE> {
    /// Append one byte, see [`Transcript::push`]
    pub fn push(&self, byte: u8) -> Result<(), TranscriptFull> {
        self.transcript.push(byte)
    }
}

/// Consumer handle for a [`Transcript`]
#[derive(Clone, Copy)]
pub struct TranscriptReader<'a, const SIZE: usize> {
    transcript: &'a Transcript<SIZE>,
}

impl<const SIZE: usize> TranscriptReader<'_, SIZE> {
    /// Move up to `max` bytes into `sink`, see [`Transcript::drain_to`]
    pub fn drain_to<S: ByteSink + ?Sized>(
        &self,
        sink: &mut S,
        max: usize,
    ) -> Result<usize, SinkFault> {
        self.transcript.drain_to(sink, max)
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }
}
