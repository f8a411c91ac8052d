//! Keypad capability

/// Raw code keypad drivers return when no key is down
pub const NOT_PRESSED: u8 = 0xFF;

/// Non-blocking keypad
///
/// Keys are reported as ASCII characters (`b'0'..=b'9'` for the digit
/// keys). The core never scans the matrix itself.
pub trait Keypad {
    /// Key currently held down, `None` if no key is pressed
    fn poll(&mut self) -> Option<u8>;
}

impl<K: Keypad + ?Sized> Keypad for &mut K {
    fn poll(&mut self) -> Option<u8> {
        (**self).poll()
    }
}

/// Map a raw driver code to a key, treating [`NOT_PRESSED`] as no key
pub const fn key_from_raw(raw: u8) -> Option<u8> {
    if raw == NOT_PRESSED {
        None
    } else {
        Some(raw)
    }
}
