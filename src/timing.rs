//! Keying timings
//!
//! All durations are whole multiples of a single dot.

use embassy_time::Duration;

const DOT_MS: u64 = 200;

/// Dot duration, the base unit
pub const DOT_TIME: Duration = Duration::from_millis(DOT_MS);

/// Dash duration (3 dots)
pub const DASH_TIME: Duration = Duration::from_millis(3 * DOT_MS);

/// Gap between two pulses of the same letter (1 dot)
pub const PULSE_GAP: Duration = DOT_TIME;

/// Gap between two letters of the same word (3 dots)
pub const LETTER_GAP: Duration = Duration::from_millis(3 * DOT_MS);

/// Gap between two words (7 dots)
pub const WORD_GAP: Duration = Duration::from_millis(7 * DOT_MS);
