//! Peripheral abstraction traits
//!
//! These traits define the interface between the clock logic and the
//! board's keypad, character LCD and seven-segment hardware.

pub mod display;
pub mod keypad;
pub mod segment;

pub use display::{CharDisplay, CharDisplayExt, DisplayError, LCD_COLS, LCD_ROWS};
pub use keypad::{key_from_raw, Keypad, NOT_PRESSED};
pub use segment::{DigitPosition, DigitSelect, SegmentBus, SegmentError};
