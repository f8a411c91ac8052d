//! Keypad entry helpers
//!
//! All waits here spin on [`Keypad::poll`] in the foreground. Nothing in
//! this module may be called from the tick interrupt.

use embedded_hal::delay::DelayNs;

use crate::traits::{CharDisplay, DisplayError, Keypad};

/// Combine two digit values into `10 * tens + ones`
pub const fn combine_digits(tens: u8, ones: u8) -> u8 {
    tens * 10 + ones
}

/// Value of an ASCII digit key
pub const fn digit_value(key: u8) -> Option<u8> {
    if key.is_ascii_digit() {
        Some(key - b'0')
    } else {
        None
    }
}

/// Spin until a key accepted by `accept` is pressed and return it
///
/// Other keys are ignored and the wait continues.
pub fn wait_for_key<K, F>(keypad: &mut K, accept: F) -> u8
where
    K: Keypad + ?Sized,
    F: Fn(u8) -> bool,
{
    loop {
        if let Some(key) = keypad.poll() {
            if accept(key) {
                return key;
            }
        }
    }
}

/// Poll until no key is reported, discarding what is still queued
pub fn drain<K: Keypad + ?Sized>(keypad: &mut K) {
    while keypad.poll().is_some() {}
}

/// Reads a two-digit number from the keypad
///
/// Each digit is echoed to the LCD at the cursor, followed by a debounce
/// pause. The result is `0..=99`; range checks are the caller's job.
#[derive(Debug, Clone, Copy)]
pub struct DigitReader {
    debounce_ms: u32,
}

impl DigitReader {
    pub const fn new(debounce_ms: u32) -> Self {
        Self { debounce_ms }
    }

    /// Block until two digits are entered
    pub fn read_two_digit_value<K, L, D>(
        &self,
        keypad: &mut K,
        lcd: &mut L,
        delay: &mut D,
    ) -> Result<u8, DisplayError>
    where
        K: Keypad + ?Sized,
        L: CharDisplay + ?Sized,
        D: DelayNs + ?Sized,
    {
        let tens = self.read_digit(keypad, lcd, delay)?;
        let ones = self.read_digit(keypad, lcd, delay)?;
        let value = combine_digits(tens, ones);
        trace!("entered {=u8}", value);
        Ok(value)
    }

    fn read_digit<K, L, D>(
        &self,
        keypad: &mut K,
        lcd: &mut L,
        delay: &mut D,
    ) -> Result<u8, DisplayError>
    where
        K: Keypad + ?Sized,
        L: CharDisplay + ?Sized,
        D: DelayNs + ?Sized,
    {
        let key = wait_for_key(keypad, |key| key.is_ascii_digit());
        lcd.write_char(key as char)?;
        delay.delay_ms(self.debounce_ms);
        Ok(digit_value(key).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, MockKeypad, MockLcd};

    fn read(keypad: MockKeypad) -> (u8, MockLcd, MockDelay) {
        let mut keypad = keypad;
        let mut lcd = MockLcd::new();
        let mut delay = MockDelay::new();
        let value = DigitReader::new(200)
            .read_two_digit_value(&mut keypad, &mut lcd, &mut delay)
            .unwrap();
        (value, lcd, delay)
    }

    #[test]
    fn test_reads_twenty_three() {
        let (value, lcd, _) = read(MockKeypad::new().keys("23"));
        assert_eq!(value, 23);
        assert_eq!(lcd.log, "23");
    }

    #[test]
    fn test_reads_zero() {
        let (value, _, _) = read(MockKeypad::new().keys("00"));
        assert_eq!(value, 0);
    }

    #[test]
    fn test_reads_ninety_nine() {
        let (value, _, _) = read(MockKeypad::new().keys("99"));
        assert_eq!(value, 99);
    }

    #[test]
    fn test_waits_through_idle_polls() {
        let (value, _, _) = read(MockKeypad::new().idle(50).keys("4").idle(20).keys("2"));
        assert_eq!(value, 42);
    }

    #[test]
    fn test_debounce_after_each_digit() {
        let (_, _, delay) = read(MockKeypad::new().keys("15"));
        assert_eq!(delay.calls_ms, [200, 200]);
    }

    #[test]
    fn test_command_keys_are_skipped_without_echo() {
        let (value, lcd, _) = read(MockKeypad::new().keys("*1#A7"));
        assert_eq!(value, 17);
        assert_eq!(lcd.log, "17");
    }

    #[test]
    fn test_wait_for_key_ignores_other_keys() {
        let mut keypad = MockKeypad::new().keys("9351");
        let key = wait_for_key(&mut keypad, |k| k == b'1' || k == b'2');
        assert_eq!(key, b'1');
    }

    #[test]
    fn test_drain_discards_held_key() {
        let mut keypad = MockKeypad::new().hold(b'1', 5).keys("2");
        drain(&mut keypad);
        assert_eq!(keypad.poll(), Some(b'2'));
    }

    #[test]
    fn test_display_error_propagates() {
        let mut keypad = MockKeypad::new().keys("12");
        let mut lcd = MockLcd::new();
        lcd.fail = true;
        let mut delay = MockDelay::new();

        let result = DigitReader::new(200)
            .read_two_digit_value(&mut keypad, &mut lcd, &mut delay);
        assert_eq!(result, Err(DisplayError::Communication));
    }

    #[test]
    fn test_combine_digits() {
        assert_eq!(combine_digits(2, 3), 23);
        assert_eq!(combine_digits(0, 0), 0);
        assert_eq!(digit_value(b'7'), Some(7));
        assert_eq!(digit_value(b'#'), None);
    }
}
