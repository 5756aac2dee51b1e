mod tests {
    use morse_led::alphabet::{ALPHABET, ALPHABET_SIZE, Pattern, encode, encode_byte};
    use morse_led::classify::{Symbol, classify};
    use morse_led::pulse::Pulse;

    const MORSE: [&str; ALPHABET_SIZE] = [
        ".-", "-...", "-.-.", "-..", ".", "..-.", "--.", "....", "..", ".---", "-.-", ".-..",
        "--", "-.", "---", ".--.", "--.-", ".-.", "...", "-", "..-", "...-", ".--", "-..-",
        "-.--", "--..",
    ];

    fn render(pattern: Pattern) -> String {
        pattern.pulses().map(|pulse| pulse.symbol() as char).collect()
    }

    #[test]
    fn test_table_matches_morse() {
        for (pattern, expected) in ALPHABET.iter().zip(MORSE) {
            assert_eq!(render(*pattern), expected);
        }
    }

    #[test]
    fn test_case_insensitive() {
        for (upper, lower) in (b'A'..=b'Z').zip(b'a'..=b'z') {
            assert_eq!(classify(upper), classify(lower));
            assert_eq!(encode_byte(upper), encode_byte(lower));
        }
        assert_eq!(classify(b'A'), Symbol::Letter(0));
        assert_eq!(classify(b'z'), Symbol::Letter(25));
    }

    #[test]
    fn test_whitespace() {
        for byte in [b' ', b'\t', b'\r', b'\n'] {
            assert_eq!(classify(byte), Symbol::Whitespace);
            assert_eq!(encode_byte(byte), Pattern::WHITESPACE);
        }
    }

    #[test]
    fn test_unsupported_bytes_skip() {
        for byte in 0..=u8::MAX {
            if byte.is_ascii_alphabetic() || matches!(byte, b' ' | b'\t' | b'\r' | b'\n') {
                continue;
            }
            assert_eq!(classify(byte), Symbol::Unsupported);
            assert_eq!(encode_byte(byte), Pattern::SKIP);
        }
    }

    #[test]
    fn test_sentinels_are_not_letters() {
        assert_ne!(Pattern::WHITESPACE, Pattern::SKIP);
        for pattern in ALPHABET {
            assert!(!pattern.is_whitespace());
            assert!(!pattern.is_skip());
        }
        assert_eq!(Pattern::SKIP.pulses().count(), 0);
        assert_eq!(Pattern::WHITESPACE.pulses().count(), 0);
    }

    #[test]
    fn test_encode_symbol() {
        assert_eq!(encode(Symbol::Letter(18)), Pattern::from_bits(0xA800));
        assert_eq!(encode(Symbol::Letter(26)), Pattern::SKIP);
        assert_eq!(encode(Symbol::Whitespace), Pattern::WHITESPACE);
        assert_eq!(encode(Symbol::Unsupported), Pattern::SKIP);
        assert_eq!(
            encode(Symbol::Letter(14)).pulses().collect::<Vec<_>>(),
            [Pulse::Dash, Pulse::Dash, Pulse::Dash]
        );
    }
}
