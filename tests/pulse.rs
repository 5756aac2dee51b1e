mod tests {
    use morse_led::pulse::{Pulse, Pulses};
    use morse_led::timing::{DASH_TIME, DOT_TIME};

    #[test]
    fn test_pulses_any_width() {
        // .- packed into six bits
        let pulses: Vec<_> = Pulses::new(0b10_1110, 6).collect();
        assert_eq!(pulses, [Pulse::Dot, Pulse::Dash]);

        // the same letter at the top of a byte
        let pulses: Vec<_> = Pulses::new(0b1011_1000, 8).collect();
        assert_eq!(pulses, [Pulse::Dot, Pulse::Dash]);
    }

    #[test]
    fn test_bits_above_width_ignored() {
        let pulses: Vec<_> = Pulses::new(0xFF00_0000 | 0b1010, 4).collect();
        assert_eq!(pulses, [Pulse::Dot, Pulse::Dot]);
    }

    #[test]
    fn test_unterminated_run_dropped() {
        assert_eq!(Pulses::new(0b111, 3).count(), 0);
        assert_eq!(Pulses::new(0b1011, 4).collect::<Vec<_>>(), [Pulse::Dot]);
    }

    #[test]
    fn test_other_run_lengths_ignored() {
        let pulses: Vec<_> = Pulses::new(0b1101_1110_1000, 12).collect();
        assert_eq!(pulses, [Pulse::Dot]);
    }

    #[test]
    fn test_wide_patterns_clamped() {
        let pulses: Vec<_> = Pulses::new(0xE000_0000, 64).collect();
        assert_eq!(pulses, [Pulse::Dash]);
        assert_eq!(Pulses::new(0b10, 0).count(), 0);
    }

    #[test]
    fn test_pulse_timing() {
        assert_eq!(Pulse::Dot.duration(), DOT_TIME);
        assert_eq!(Pulse::Dash.duration(), DASH_TIME);
        assert_eq!(Pulse::Dot.symbol(), b'.');
        assert_eq!(Pulse::Dash.symbol(), b'-');
    }
}
