//! Morse alphabet table
//!
//! Every letter is packed into one 16-bit word. Reading from the most
//! significant bit, a run of one set bit is a dot and a run of three set bits
//! is a dash. Each run is closed by a single unset bit, and the unused low
//! bits are zero.

use crate::classify::Symbol;
use crate::pulse::Pulses;

/// Number of letters in the table
pub const ALPHABET_SIZE: usize = 26;

/// Declared bit width of a packed pattern
pub const PATTERN_WIDTH: u32 = u16::BITS;

/// Packed dot/dash pattern of a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u16);

impl Pattern {
    /// Whitespace marker. Emits a word gap when it ends a word.
    pub const WHITESPACE: Self = Self(0);

    /// Unsupported marker. Emits nothing.
    pub const SKIP: Self = Self(0xFFFF);

    /// Wrap a raw packed value
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw packed value
    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn is_whitespace(self) -> bool {
        self.0 == Self::WHITESPACE.0
    }

    pub const fn is_skip(self) -> bool {
        self.0 == Self::SKIP.0
    }

    /// Iterate the pulses encoded in this pattern
    pub const fn pulses(self) -> Pulses {
        Pulses::new(self.0 as u32, PATTERN_WIDTH)
    }
}

/// Letter patterns, indexed by position in the Latin alphabet
pub const ALPHABET: [Pattern; ALPHABET_SIZE] = [
    Pattern(0xB800), // A .-
    Pattern(0xEA80), // B -...
    Pattern(0xEBA0), // C -.-.
    Pattern(0xEA00), // D -..
    Pattern(0x8000), // E .
    Pattern(0xAE80), // F ..-.
    Pattern(0xEE80), // G --.
    Pattern(0xAA00), // H ....
    Pattern(0xA000), // I ..
    Pattern(0xBBB8), // J .---
    Pattern(0xEB80), // K -.-
    Pattern(0xBA80), // L .-..
    Pattern(0xEE00), // M --
    Pattern(0xE800), // N -.
    Pattern(0xEEE0), // O ---
    Pattern(0xBBA0), // P .--.
    Pattern(0xEEB8), // Q --.-
    Pattern(0xBA00), // R .-.
    Pattern(0xA800), // S ...
    Pattern(0xE000), // T -
    Pattern(0xAE00), // U ..-
    Pattern(0xAB80), // V ...-
    Pattern(0xBB80), // W .--
    Pattern(0xEAE0), // X -..-
    Pattern(0xEBB8), // Y -.--
    Pattern(0xEEA0), // Z --..
];

/// Look up the pattern for a classified byte
pub const fn encode(symbol: Symbol) -> Pattern {
    match symbol {
        Symbol::Letter(index) => {
            if (index as usize) < ALPHABET_SIZE {
                ALPHABET[index as usize]
            } else {
                Pattern::SKIP
            }
        }
        Symbol::Whitespace => Pattern::WHITESPACE,
        Symbol::Unsupported => Pattern::SKIP,
    }
}

/// Classify and encode a raw input byte
pub const fn encode_byte(byte: u8) -> Pattern {
    encode(crate::classify::classify(byte))
}
