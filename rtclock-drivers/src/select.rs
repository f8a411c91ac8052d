//! Digit select lines on an output port
//!
//! Line `n` of the port enables digit position `n`, with 0 the rightmost
//! (seconds ones) digit.

use rtclock_core::traits::{DigitPosition, DigitSelect, SegmentError};
use rtclock_hal::{Level, OutputPort};

/// Mask over the six select lines
const SELECT_LINES: u8 = 0b0011_1111;

/// Digit select driving a port
pub struct PortDigitSelect<P> {
    port: P,
    /// Level that enables a digit
    active: Level,
}

impl<P: OutputPort> PortDigitSelect<P> {
    pub fn new(port: P, active: Level) -> Self {
        Self { port, active }
    }

    /// Digit enabled by pulling its line low (common-cathode sink)
    pub fn active_low(port: P) -> Self {
        Self::new(port, Level::Low)
    }

    /// Digit enabled by driving its line high
    pub fn active_high(port: P) -> Self {
        Self::new(port, Level::High)
    }

    /// Last port value written
    pub fn port_value(&self) -> u8 {
        self.port.value()
    }

    pub fn release_port(self) -> P {
        self.port
    }

    fn drive(&mut self, active_low_mask: u8) {
        let value = match self.active {
            Level::Low => active_low_mask,
            Level::High => !active_low_mask,
        };
        let mask = SELECT_LINES & self.port.width().mask();
        self.port.write(value & mask);
    }
}

impl<P: OutputPort> DigitSelect for PortDigitSelect<P> {
    fn init(&mut self) -> Result<(), SegmentError> {
        self.drive(SELECT_LINES);
        Ok(())
    }

    fn select(&mut self, position: DigitPosition) -> Result<(), SegmentError> {
        if position.index() >= self.port.width().bits() {
            return Err(SegmentError::Select);
        }
        self.drive(position.select_mask());
        Ok(())
    }

    fn release(&mut self) -> Result<(), SegmentError> {
        self.drive(SELECT_LINES);
        Ok(())
    }
}
