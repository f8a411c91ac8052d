//! Output port built from individual pins

use rtclock_hal::{Level, OutputPin, OutputPort, PortWidth};

/// `N` output pins driven as one port
///
/// Pin `n` of the array is bit `n` of the port value. Boards without a
/// byte-wide GPIO register wire the segment bus and select lines this way.
pub struct PinPort<P, const N: usize> {
    pins: [P; N],
    value: u8,
}

impl<P: OutputPin, const N: usize> PinPort<P, N> {
    /// Group pins into a port and drive every pin low
    pub fn new(pins: [P; N]) -> Self {
        let mut port = Self { pins, value: 0 };
        port.write(0);
        port
    }

    /// Unwrap the pins
    pub fn release(self) -> [P; N] {
        self.pins
    }
}

impl<P: OutputPin, const N: usize> OutputPort for PinPort<P, N> {
    fn write(&mut self, value: u8) {
        let value = value & self.width().mask();
        for (bit, pin) in self.pins.iter_mut().enumerate().take(8) {
            pin.set_level(Level::from_bit(value & (1 << bit) != 0));
        }
        self.value = value;
    }

    fn value(&self) -> u8 {
        self.value
    }

    fn width(&self) -> PortWidth {
        PortWidth::new(N as u8)
    }
}
