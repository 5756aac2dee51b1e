#![allow(dead_code)]

use morse_led::{ByteSource, Duration, Hold, SignalDriver, SourceReadFault, Transcript};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    Register(String),
    Assert,
    Deassert,
    Unregister,
}

/// Driver recording every call it receives
#[derive(Debug, Default)]
pub(crate) struct RecordingDriver {
    pub(crate) events: Vec<Event>,
}

impl SignalDriver for RecordingDriver {
    fn assert(&mut self) {
        self.events.push(Event::Assert);
    }

    fn deassert(&mut self) {
        self.events.push(Event::Deassert);
    }

    fn register(&mut self, name: &str) {
        self.events.push(Event::Register(name.to_string()));
    }

    fn unregister(&mut self) {
        self.events.push(Event::Unregister);
    }
}

/// Hold that returns immediately and remembers what it was asked for
#[derive(Debug, Default)]
pub(crate) struct RecordingHold {
    pub(crate) holds: Vec<Duration>,
}

impl Hold for RecordingHold {
    fn hold(&mut self, duration: Duration) {
        self.holds.push(duration);
    }
}

/// Source that fails to read one offset
pub(crate) struct FaultySource<'a> {
    pub(crate) bytes: &'a [u8],
    pub(crate) fail_at: usize,
}

impl ByteSource for FaultySource<'_> {
    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn read_byte(&mut self, index: usize) -> Result<u8, SourceReadFault> {
        if index == self.fail_at {
            return Err(SourceReadFault { index });
        }
        Ok(self.bytes[index])
    }
}

/// Drain the whole transcript into a string
pub(crate) fn drain_string<const SIZE: usize>(transcript: &Transcript<SIZE>) -> String {
    let mut sink = heapless::Vec::<u8, 1024>::new();
    transcript.drain_to(&mut sink, usize::MAX).unwrap();
    String::from_utf8(sink.to_vec()).unwrap()
}
