//! Pulse decomposition of packed patterns
//!
//! A pattern is scanned from its most significant bit down to bit zero.
//! Set bits extend the current run; an unset bit closes it. A closed run of
//! length 1 is a dot, a closed run of length 3 is a dash, any other length
//! produces nothing. A run still open when the scan ends is discarded.

use embassy_time::Duration;

use crate::timing::{DASH_TIME, DOT_TIME};

/// A single keyed element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pulse {
    Dot,
    Dash,
}

impl Pulse {
    /// How long the signal stays asserted for this pulse
    pub const fn duration(self) -> Duration {
        match self {
            Self::Dot => DOT_TIME,
            Self::Dash => DASH_TIME,
        }
    }

    /// Transcript character for this pulse
    pub const fn symbol(self) -> u8 {
        match self {
            Self::Dot => b'.',
            Self::Dash => b'-',
        }
    }

    const fn from_run(run: u32) -> Option<Self> {
        match run {
            1 => Some(Self::Dot),
            3 => Some(Self::Dash),
            _ => None,
        }
    }
}

/// Iterator over the pulses of a packed pattern of arbitrary width
#[derive(Debug, Clone)]
pub struct Pulses {
    pattern: u32,
    width: u32,
    scanned: u32,
    run: u32,
}

impl Pulses {
    /// Scan the low `width` bits of `pattern`
    ///
    /// Widths above 32 are clamped to 32.
    pub const fn new(pattern: u32, width: u32) -> Self {
        let width = if width > u32::BITS { u32::BITS } else { width };
        Self {
            pattern,
            width,
            scanned: 0,
            run: 0,
        }
    }
}

impl Iterator for Pulses {
    type Item = Pulse;

    fn next(&mut self) -> Option<Pulse> {
        while self.scanned < self.width {
            let mask = 1u32 << (self.width - self.scanned - 1);
            self.scanned += 1;

            if self.pattern & mask != 0 {
                self.run += 1;
                continue;
            }

            let run = core::mem::take(&mut self.run);
            if let Some(pulse) = Pulse::from_run(run) {
                return Some(pulse);
            }
        }
        None
    }
}
