//! The clock's front panel

/// Every peripheral the foreground loop talks to
///
/// Fields are public so boards can build a panel from their drivers and
/// tests can inspect their mocks afterwards.
#[derive(Debug)]
pub struct Panel<K, L, B, S, D> {
    /// 4x4 keypad
    pub keypad: K,
    /// 2x16 character LCD
    pub lcd: L,
    /// Seven-segment lines shared by all digits
    pub segments: B,
    /// Digit position select lines
    pub select: S,
    /// Busy-wait delay
    pub delay: D,
}

impl<K, L, B, S, D> Panel<K, L, B, S, D> {
    pub fn new(keypad: K, lcd: L, segments: B, select: S, delay: D) -> Self {
        Self {
            keypad,
            lcd,
            segments,
            select,
            delay,
        }
    }
}
