//! Pending write requests
//!
//! The encoder only handles one input at a time and blocks while keying.
//! Producers that must not block queue their text here instead; the worker
//! owning the device drains the queue with
//! [`MorseDevice::serve_pending`](crate::device::MorseDevice::serve_pending).
//! Requests that do not fit are rejected, never split or merged.

use core::cell::RefCell;

use critical_section::Mutex;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::{Deque, Vec};

use crate::error::SubmitError;

/// Default maximum length of a single request in bytes
pub const DEFAULT_REQUEST_LEN: usize = 128;

/// Default number of requests that can wait at once
pub const DEFAULT_REQUEST_DEPTH: usize = 4;

/// Text of one queued write
pub type WriteRequest<const LEN: usize> = Vec<u8, LEN>;

/// Bounded queue of write requests
///
/// `LEN` is the maximum request length, `DEPTH` the number of queued requests.
pub struct RequestQueue<const LEN: usize, const DEPTH: usize> {
    inner: Mutex<RefCell<Deque<WriteRequest<LEN>, DEPTH>>>,
}

impl<const LEN: usize, const DEPTH: usize> RequestQueue<LEN, DEPTH> {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a submitter handle
    ///
    /// Several submitters may coexist; requests keep their submission order.
    pub const fn submitter(&self) -> RequestSubmitter<'_, LEN, DEPTH> {
        RequestSubmitter { queue: self }
    }

    /// Get a receiver handle for the worker
    pub const fn receiver(&self) -> RequestReceiver<'_, LEN, DEPTH> {
        RequestReceiver { queue: self }
    }

    /// Copy `text` into the queue
    pub fn submit(&self, text: &[u8]) -> Result<(), SubmitError> {
        let request = WriteRequest::<LEN>::from_slice(text).map_err(|()| SubmitError::TooLong {
            len: text.len(),
            max: LEN,
        });
        let result = request.and_then(|request| {
            critical_section::with(|cs| {
                let mut queue = self.inner.borrow(cs).borrow_mut();
                queue.push_back(request).map_err(|_| SubmitError::QueueFull)
            })
        });

        #[cfg(feature = "esp32-log")]
        {
            if let Err(error) = &result {
                println!("[RequestQueue.submit] rejected: {}", error);
            }
        }
        result
    }

    /// Take the oldest request, if any
    pub fn try_next(&self) -> Option<WriteRequest<LEN>> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of requests waiting
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const LEN: usize, const DEPTH: usize> Default for RequestQueue<LEN, DEPTH> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle for a [`RequestQueue`]
#[derive(Clone, Copy)]
pub struct RequestSubmitter<'a, const LEN: usize, const DEPTH: usize> {
    queue: &'a RequestQueue<LEN, DEPTH>,
}

impl<const LEN: usize, const DEPTH: usize> RequestSubmitter<'_, LEN, DEPTH> {
    /// Queue `text`, see [`RequestQueue::submit`]
    pub fn submit(&self, text: &[u8]) -> Result<(), SubmitError> {
        self.queue.submit(text)
    }
}

/// Worker handle for a [`RequestQueue`]
#[derive(Clone, Copy)]
pub struct RequestReceiver<'a, const LEN: usize, const DEPTH: usize> {
    queue: &'a RequestQueue<LEN, DEPTH>,
}

impl<const LEN: usize, const DEPTH: usize> RequestReceiver<'_, LEN, DEPTH> {
    /// Take the oldest request, if any
    pub fn try_next(&self) -> Option<WriteRequest<LEN>> {
        self.queue.try_next()
    }
}
