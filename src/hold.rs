//! Timed holds
//!
//! The encoder never sleeps on its own. Every pause goes through a [`Hold`],
//! so the host decides whether a hold is a real delay, a scaled one or none
//! at all.

use embassy_time::Duration;

/// Blocks the calling context for a given duration
pub trait Hold {
    fn hold(&mut self, duration: Duration);
}

/// Busy-waits on the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingHold;

impl Hold for BlockingHold {
    fn hold(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}

/// Returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHold;

impl Hold for NoHold {
    fn hold(&mut self, _duration: Duration) {}
}

impl<H: Hold + ?Sized> Hold for &mut H {
    fn hold(&mut self, duration: Duration) {
        (**self).hold(duration);
    }
}
