//! Morse character device
//!
//! Wraps the encoder with the plumbing around it: registering the signal
//! driver under a trigger name, file-like `write`/`read`, and serving queued
//! write requests on the worker that owns the device.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::SignalDriver;
use crate::encoder::MorseEncoder;
use crate::error::{EncodeError, SinkFault};
use crate::hold::Hold;
use crate::io::{ByteSource, SliceSink};
use crate::request::RequestReceiver;
use crate::transcript::{Transcript, TranscriptReader};

/// Trigger name used when none is configured
pub const DEFAULT_TRIGGER_NAME: &str = "morse-code";

/// Device configuration
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Name the signal driver is registered under
    pub trigger_name: &'static str,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            trigger_name: DEFAULT_TRIGGER_NAME,
        }
    }
}

/// Outcome of [`MorseDevice::serve_pending`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeSummary {
    /// Requests encoded completely
    pub processed: usize,
    /// Requests aborted by an encode error
    pub failed: usize,
}

/// Morse device - owns the encoder for its whole lifetime
pub struct MorseDevice<'a, D: SignalDriver, H: Hold, const SIZE: usize> {
    encoder: MorseEncoder<'a, D, H, SIZE>,
    transcript: &'a Transcript<SIZE>,
    trigger_name: &'static str,
    position: usize,
}

impl<'a, D: SignalDriver, H: Hold, const SIZE: usize> MorseDevice<'a, D, H, SIZE> {
    /// Register the driver and bring the device up
    pub fn new(
        mut driver: D,
        hold: H,
        transcript: &'a Transcript<SIZE>,
        config: &DeviceConfig,
    ) -> Self {
        #[cfg(feature = "esp32-log")]
        println!("----> {} device init()", config.trigger_name);
        driver.register(config.trigger_name);

        Self {
            encoder: MorseEncoder::new(driver, hold, transcript.writer()),
            transcript,
            trigger_name: config.trigger_name,
            position: 0,
        }
    }

    /// Encode `buf`
    ///
    /// Returns the whole input length on success, trimmed bytes included.
    pub fn write(&mut self, buf: &[u8]) -> Result<usize, EncodeError> {
        let mut source = buf;
        self.write_from(&mut source)
    }

    /// Encode everything `source` holds
    pub fn write_from<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<usize, EncodeError> {
        let count = source.len();
        self.encoder.process(source)?;
        self.position += count;
        Ok(count)
    }

    /// Copy up to `buf.len()` transcript bytes into `buf`
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, SinkFault> {
        let max = buf.len();
        let mut sink = SliceSink::new(buf);
        self.transcript.drain_to(&mut sink, max)
    }

    /// Handle for reading the transcript from elsewhere
    pub const fn reader(&self) -> TranscriptReader<'a, SIZE> {
        self.transcript.reader()
    }

    /// Encode every queued request, oldest first
    ///
    /// A failing request is counted and skipped; later requests still run.
    pub fn serve_pending<const LEN: usize, const DEPTH: usize>(
        &mut self,
        requests: RequestReceiver<'_, LEN, DEPTH>,
    ) -> ServeSummary {
        let mut summary = ServeSummary::default();

        while let Some(request) = requests.try_next() {
            match self.write(&request) {
                Ok(_) => summary.processed += 1,
                Err(_error) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[MorseDevice.serve_pending] request failed: {}", _error);
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    /// Total bytes accepted by successful writes
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn trigger_name(&self) -> &'static str {
        self.trigger_name
    }

    pub const fn encoder(&self) -> &MorseEncoder<'a, D, H, SIZE> {
        &self.encoder
    }

    /// Turn the output off, unregister the driver and hand it back
    pub fn shutdown(self) -> D {
        #[cfg(feature = "esp32-log")]
        println!("<---- {} device exit()", self.trigger_name);
        let (mut driver, _hold) = self.encoder.into_parts();
        driver.unregister();
        driver
    }
}
