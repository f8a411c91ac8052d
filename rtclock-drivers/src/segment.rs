//! Seven-segment bus on an output port
//!
//! Bit 0 of the pattern is segment `a`, bit 6 is segment `g`. Bit 7 (the
//! decimal point) is never lit.

use rtclock_core::traits::{SegmentBus, SegmentError};
use rtclock_hal::{Level, OutputPort};

/// Segment lines used by a pattern
const SEGMENT_MASK: u8 = 0x7F;

/// Segment bus driving a port
pub struct PortSegmentBus<P> {
    port: P,
    /// Level that lights a segment
    lit: Level,
}

impl<P: OutputPort> PortSegmentBus<P> {
    /// Create a bus whose segments light at `lit`
    pub fn new(port: P, lit: Level) -> Self {
        Self { port, lit }
    }

    /// Common-cathode digits: segment on = pin high
    pub fn common_cathode(port: P) -> Self {
        Self::new(port, Level::High)
    }

    /// Common-anode digits: segment on = pin low
    pub fn common_anode(port: P) -> Self {
        Self::new(port, Level::Low)
    }

    /// Blank every segment
    pub fn blank(&mut self) {
        self.drive(0);
    }

    /// Last port value written
    pub fn port_value(&self) -> u8 {
        self.port.value()
    }

    pub fn release(self) -> P {
        self.port
    }

    fn drive(&mut self, pattern: u8) {
        let pattern = pattern & SEGMENT_MASK;
        let value = match self.lit {
            Level::High => pattern,
            Level::Low => !pattern,
        };
        self.port.write(value & self.port.width().mask());
    }
}

impl<P: OutputPort> SegmentBus for PortSegmentBus<P> {
    fn init(&mut self) -> Result<(), SegmentError> {
        self.blank();
        Ok(())
    }

    fn write_pattern(&mut self, pattern: u8) -> Result<(), SegmentError> {
        self.drive(pattern);
        Ok(())
    }
}
