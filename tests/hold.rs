mod tests {
    use std::time::Instant as StdInstant;

    use morse_led::{BlockingHold, Duration, Hold, NoHold};

    #[test]
    fn test_blocking_hold_waits() {
        let started = StdInstant::now();
        BlockingHold.hold(Duration::from_millis(20));
        assert!(started.elapsed().as_millis() >= 20);
    }

    #[test]
    fn test_no_hold_returns() {
        let started = StdInstant::now();
        NoHold.hold(Duration::from_secs(60));
        assert!(started.elapsed().as_secs() < 60);
    }

    fn hold_twice<H: Hold>(mut hold: H) {
        hold.hold(Duration::from_millis(1));
        hold.hold(Duration::from_millis(1));
    }

    #[test]
    fn test_hold_through_reference() {
        let mut hold = BlockingHold;
        let started = StdInstant::now();
        hold_twice(&mut hold);
        assert!(started.elapsed().as_millis() >= 2);
    }
}
