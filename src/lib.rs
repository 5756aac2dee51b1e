#![no_std]

pub mod alphabet;
pub mod classify;
pub mod device;
pub mod encoder;
pub mod error;
pub mod hold;
pub mod io;
pub mod pulse;
pub mod request;
pub mod signal;
pub mod timing;
pub mod transcript;

pub use alphabet::{ALPHABET, Pattern, encode, encode_byte};
pub use classify::{Symbol, classify};
pub use device::{DEFAULT_TRIGGER_NAME, DeviceConfig, MorseDevice, ServeSummary};
pub use encoder::{MorseEncoder, WordState, active_len, trim_end};
pub use error::{EncodeError, SinkFault, SourceReadFault, SubmitError, TranscriptFull};
pub use hold::{BlockingHold, Hold, NoHold};
pub use io::{ByteSink, ByteSource, SliceSink};
pub use pulse::{Pulse, Pulses};
pub use request::{RequestQueue, RequestReceiver, RequestSubmitter};
pub use signal::{Signal, StripSignal};
pub use transcript::{
    DEFAULT_TRANSCRIPT_SIZE, OverflowPolicy, Transcript, TranscriptReader, TranscriptWriter,
};

pub use embassy_time::Duration;

/// Abstract on/off output driver
///
/// Implement this trait to key an LED, a buzzer or a transmitter.
/// `assert` and `deassert` may be called repeatedly with the same state.
pub trait SignalDriver {
    /// Turn the output on
    fn assert(&mut self);

    /// Turn the output off
    fn deassert(&mut self);

    /// Called once when the owning device comes up
    fn register(&mut self, _name: &str) {}

    /// Called once when the owning device shuts down
    fn unregister(&mut self) {}
}

impl<D: SignalDriver + ?Sized> SignalDriver for &mut D {
    fn assert(&mut self) {
        (**self).assert();
    }

    fn deassert(&mut self) {
        (**self).deassert();
    }

    fn register(&mut self, name: &str) {
        (**self).register(name);
    }

    fn unregister(&mut self) {
        (**self).unregister();
    }
}
