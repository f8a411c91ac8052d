//! embedded-hal pin adapter
//!
//! Lets any infallible `embedded-hal` 1.0 output pin serve as an
//! [`rtclock_hal::OutputPin`].

use core::convert::Infallible;

use embedded_hal::digital::OutputPin as EhOutputPin;
use rtclock_hal::{Level, OutputPin};

/// `embedded-hal` output pin wrapped for the clock drivers
///
/// The driven level is tracked locally, since reading it back through
/// `embedded-hal` needs `&mut` access.
pub struct EmbeddedHalPin<P> {
    pin: P,
    high: bool,
}

impl<P> EmbeddedHalPin<P>
where
    P: EhOutputPin<Error = Infallible>,
{
    /// Wrap a pin and drive it to `initial`
    pub fn new(pin: P, initial: Level) -> Self {
        let mut wrapped = Self { pin, high: false };
        wrapped.set_level(initial);
        wrapped
    }

    /// Unwrap the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> OutputPin for EmbeddedHalPin<P>
where
    P: EhOutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.pin.set_high() {
            Ok(()) => self.high = true,
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.pin.set_low() {
            Ok(()) => self.high = false,
            Err(never) => match never {},
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
