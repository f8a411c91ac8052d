//! Digit extraction and segment patterns

use crate::time::TimeState;
use crate::traits::DigitPosition;

/// Segment masks for 0-9, bit 0 = `a` ... bit 6 = `g`
///
/// The `7` also lights segment `f`, matching the board's font.
pub const SEGMENT_PATTERNS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x47, 0x7F, 0x6F];

/// Segment mask for a decimal digit; only the last decimal place is used
pub const fn pattern_for(digit: u8) -> u8 {
    SEGMENT_PATTERNS[(digit % 10) as usize]
}

/// The six digits shown for one multiplexing pass
///
/// Derived from a single snapshot so all six digits belong to the same
/// second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFrame {
    digits: [u8; 6],
}

impl DisplayFrame {
    pub const fn from_time(time: &TimeState) -> Self {
        Self {
            digits: [
                time.seconds % 10,
                time.seconds / 10 % 10,
                time.minutes % 10,
                time.minutes / 10 % 10,
                time.hours % 10,
                time.hours / 10 % 10,
            ],
        }
    }

    /// Digit value at a position
    pub const fn digit(&self, position: DigitPosition) -> u8 {
        self.digits[position.index() as usize]
    }

    /// Positions paired with their segment patterns, in lighting order
    pub fn patterns(&self) -> impl Iterator<Item = (DigitPosition, u8)> + '_ {
        DigitPosition::ALL
            .into_iter()
            .map(move |pos| (pos, pattern_for(self.digit(pos))))
    }
}
