//! Morse encoder
//!
//! Turns input bytes into keyed pulses and transcript characters.
//!
//! Transcript symbols:
//! - `.` dot, `-` dash
//! - one space between letters, two spaces between words
//! - a newline at the end of every encode operation
//!
//! Trailing whitespace and unsupported bytes are trimmed before encoding.
//! Leading and repeated whitespace is absorbed, so only a whitespace that
//! follows a letter produces a word gap. Unsupported bytes inside the input
//! are skipped without touching the word state.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::SignalDriver;
use crate::alphabet::{Pattern, encode_byte};
use crate::classify::classify;
use crate::error::{EncodeError, SourceReadFault, TranscriptFull};
use crate::hold::Hold;
use crate::io::ByteSource;
use crate::signal::Signal;
use crate::timing::{LETTER_GAP, PULSE_GAP, WORD_GAP};
use crate::transcript::TranscriptWriter;

/// Whether the last encoded unit was a letter
///
/// Lives for a single encode operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordState {
    in_word: bool,
}

impl WordState {
    pub const fn new() -> Self {
        Self { in_word: false }
    }

    pub const fn in_word(self) -> bool {
        self.in_word
    }
}

/// Length of the input once trailing boundary bytes are dropped
///
/// Reads backwards from the last byte and stops at the first letter.
pub fn active_len<S: ByteSource + ?Sized>(source: &mut S) -> Result<usize, SourceReadFault> {
    let mut end = source.len();
    while end > 0 {
        let byte = source.read_byte(end - 1)?;
        if !classify(byte).is_boundary() {
            break;
        }
        end -= 1;
    }
    Ok(end)
}

/// Slice form of [`active_len`]
pub fn trim_end(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|byte| !classify(*byte).is_boundary())
        .map_or(0, |last| last + 1);
    &bytes[..end]
}

/// Encoder driving one signal output and one transcript
///
/// Every operation takes `&mut self`, so at most one encode is in flight
/// per encoder.
pub struct MorseEncoder<'a, D: SignalDriver, H: Hold, const SIZE: usize> {
    signal: Signal<D>,
    hold: H,
    transcript: TranscriptWriter<'a, SIZE>,
}

impl<'a, D: SignalDriver, H: Hold, const SIZE: usize> MorseEncoder<'a, D, H, SIZE> {
    /// Create an encoder. The driver is assumed to be deasserted.
    pub const fn new(driver: D, hold: H, transcript: TranscriptWriter<'a, SIZE>) -> Self {
        Self {
            signal: Signal::new(driver),
            hold,
            transcript,
        }
    }

    /// Encode one input
    ///
    /// A read fault aborts immediately, without the closing newline.
    /// Pulses and transcript bytes produced before a fault are kept.
    pub fn process<S: ByteSource + ?Sized>(&mut self, source: &mut S) -> Result<(), EncodeError> {
        let end = active_len(source).inspect_err(Self::log_read_fault)?;

        let mut word = WordState::new();
        for index in 0..end {
            let byte = source.read_byte(index).inspect_err(Self::log_read_fault)?;
            self.emit(encode_byte(byte), &mut word)?;
        }

        self.transcript.push(b'\n')?;
        Ok(())
    }

    /// Key a single pattern
    pub fn emit(&mut self, pattern: Pattern, word: &mut WordState) -> Result<(), TranscriptFull> {
        if pattern.is_skip() {
            return Ok(());
        }

        if pattern.is_whitespace() {
            if word.in_word {
                self.transcript.push(b' ')?;
                self.transcript.push(b' ')?;
                self.hold.hold(WORD_GAP);
                word.in_word = false;
                self.signal.deassert();
            }
            return Ok(());
        }

        if word.in_word {
            self.transcript.push(b' ')?;
            self.hold.hold(LETTER_GAP);
        }
        word.in_word = true;

        for pulse in pattern.pulses() {
            self.transcript.push(pulse.symbol())?;
            self.signal.assert();
            self.hold.hold(pulse.duration());

            if self.signal.is_asserted() {
                self.signal.deassert();
                self.hold.hold(PULSE_GAP);
            }
        }
        Ok(())
    }

    pub const fn signal(&self) -> &Signal<D> {
        &self.signal
    }

    /// Deassert the output and return the driver and hold
    pub fn into_parts(self) -> (D, H) {
        (self.signal.into_driver(), self.hold)
    }

    fn log_read_fault(_fault: &SourceReadFault) {
        #[cfg(feature = "esp32-log")]
        println!("[MorseEncoder.process] {}", _fault);
    }
}
