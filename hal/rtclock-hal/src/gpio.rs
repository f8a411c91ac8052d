//! GPIO pin abstractions
//!
//! Single-pin traits used by the drivers to build segment buses and
//! digit select lines out of individual board pins.

/// Electrical level of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Level for a bit value (`true` = high)
    pub const fn from_bit(bit: bool) -> Self {
        if bit {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin high
    fn set_high(&mut self);

    /// Drive the pin low
    fn set_low(&mut self);

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;

    /// Drive the pin to a level
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }

    /// Toggle the pin
    fn toggle(&mut self) {
        if self.is_set_high() {
            self.set_low();
        } else {
            self.set_high();
        }
    }
}
