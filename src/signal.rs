//! Signal output
//!
//! [`Signal`] remembers whether the output is asserted, so the driver only
//! sees real edges.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::{RGB8, SmartLedsWrite};

use crate::SignalDriver;

/// Asserted/deasserted state on top of a [`SignalDriver`]
#[derive(Debug)]
pub struct Signal<D: SignalDriver> {
    driver: D,
    asserted: bool,
}

impl<D: SignalDriver> Signal<D> {
    /// Wrap a driver that is currently deasserted
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            asserted: false,
        }
    }

    /// Turn the output on, unless it already is
    pub fn assert(&mut self) {
        if !self.asserted {
            self.driver.assert();
            self.asserted = true;
        }
    }

    /// Turn the output off, unless it already is
    pub fn deassert(&mut self) {
        if self.asserted {
            self.driver.deassert();
            self.asserted = false;
        }
    }

    pub const fn is_asserted(&self) -> bool {
        self.asserted
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Deassert and give the driver back
    pub fn into_driver(mut self) -> D {
        self.deassert();
        self.driver
    }
}

/// Keys a whole addressable LED strip with one colour
///
/// `N` is the number of pixels on the strip.
pub struct StripSignal<W, const N: usize> {
    strip: W,
    color: RGB8,
}

impl<W, const N: usize> StripSignal<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    /// Create a strip signal lighting every pixel with `color`
    pub const fn new(strip: W, color: RGB8) -> Self {
        Self { strip, color }
    }

    pub fn set_color(&mut self, color: RGB8) {
        self.color = color;
    }

    pub fn into_inner(self) -> W {
        self.strip
    }

    fn fill(&mut self, color: RGB8) {
        if self.strip.write(core::iter::repeat_n(color, N)).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[StripSignal.fill] strip write failed");
        }
    }
}

impl<W, const N: usize> SignalDriver for StripSignal<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    fn assert(&mut self) {
        self.fill(self.color);
    }

    fn deassert(&mut self) {
        self.fill(RGB8::default());
    }
}
