/// Classification of a single input byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Latin letter, `0` for `A` through `25` for `Z`
    Letter(u8),
    /// Space, tab, carriage return or line feed
    Whitespace,
    /// Anything else
    Unsupported,
}

impl Symbol {
    /// Whitespace and unsupported bytes are trimmed from the end of the input
    pub const fn is_boundary(self) -> bool {
        !matches!(self, Self::Letter(_))
    }
}

/// Classify an input byte, ignoring letter case
pub const fn classify(byte: u8) -> Symbol {
    match byte {
        b'A'..=b'Z' => Symbol::Letter(byte - b'A'),
        b'a'..=b'z' => Symbol::Letter(byte - b'a'),
        b' ' | b'\t' | b'\r' | b'\n' => Symbol::Whitespace,
        _ => Symbol::Unsupported,
    }
}
