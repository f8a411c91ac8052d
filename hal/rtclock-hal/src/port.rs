//! Parallel output port abstraction
//!
//! A port drives several pins from one bit mask in a single write. The
//! seven-segment bus and the digit select lines are both wired this way.

/// Number of usable bits on a port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortWidth(u8);

impl PortWidth {
    /// Full 8-bit port
    pub const EIGHT: Self = Self(8);

    /// Create a port width, clamped to 1..=8 bits
    pub const fn new(bits: u8) -> Self {
        if bits == 0 {
            Self(1)
        } else if bits > 8 {
            Self(8)
        } else {
            Self(bits)
        }
    }

    /// Number of bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Mask covering every usable bit
    pub const fn mask(self) -> u8 {
        if self.0 >= 8 {
            0xFF
        } else {
            (1u8 << self.0) - 1
        }
    }
}

/// Parallel digital output port
///
/// Bit `n` of the written value drives pin `n` of the port. Bits beyond
/// [`OutputPort::width`] are ignored by implementations.
pub trait OutputPort {
    /// Write all pins of the port at once
    fn write(&mut self, value: u8);

    /// Last value written to the port
    fn value(&self) -> u8;

    /// Usable width of the port
    fn width(&self) -> PortWidth {
        PortWidth::EIGHT
    }

    /// Drive every pin high
    fn set_all(&mut self) {
        let mask = self.width().mask();
        self.write(mask);
    }

    /// Drive every pin low
    fn clear_all(&mut self) {
        self.write(0);
    }
}
