mod common;

mod tests {
    use morse_led::signal::{Signal, StripSignal};
    use morse_led::SignalDriver;
    use smart_leds::{RGB8, SmartLedsWrite};

    use crate::common::{Event, RecordingDriver};

    #[derive(Default)]
    struct MockStrip {
        frames: Vec<Vec<RGB8>>,
    }

    impl SmartLedsWrite for MockStrip {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    const AMBER: RGB8 = RGB8 { r: 255, g: 120, b: 0 };
    const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

    #[test]
    fn test_redundant_calls_filtered() {
        let mut signal = Signal::new(RecordingDriver::default());
        assert!(!signal.is_asserted());

        signal.deassert();
        signal.assert();
        signal.assert();
        assert!(signal.is_asserted());
        signal.deassert();
        signal.deassert();

        assert_eq!(signal.driver().events, [Event::Assert, Event::Deassert]);
    }

    #[test]
    fn test_into_driver_deasserts() {
        let mut signal = Signal::new(RecordingDriver::default());
        signal.assert();
        let driver = signal.into_driver();
        assert_eq!(driver.events, [Event::Assert, Event::Deassert]);
    }

    #[test]
    fn test_strip_signal() {
        let mut strip = StripSignal::<_, 3>::new(MockStrip::default(), AMBER);
        strip.assert();
        strip.deassert();
        strip.set_color(RGB8 { r: 0, g: 0, b: 255 });
        strip.assert();

        let frames = strip.into_inner().frames;
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], [AMBER; 3]);
        assert_eq!(frames[1], [BLACK; 3]);
        assert_eq!(frames[2], [RGB8 { r: 0, g: 0, b: 255 }; 3]);
    }
}
