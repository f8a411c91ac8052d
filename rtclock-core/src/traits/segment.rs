//! Seven-segment bus and digit position select

/// Errors from the seven-segment hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SegmentError {
    /// Writing the segment lines failed
    Bus,
    /// Driving the digit select lines failed
    Select,
}

impl core::fmt::Display for SegmentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SegmentError::Bus => write!(f, "segment bus write failed"),
            SegmentError::Select => write!(f, "digit select write failed"),
        }
    }
}

/// One of the six physical digit positions, in multiplexing order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitPosition {
    SecondsOnes,
    SecondsTens,
    MinutesOnes,
    MinutesTens,
    HoursOnes,
    HoursTens,
}

impl DigitPosition {
    /// All positions in the order the multiplexer lights them
    pub const ALL: [DigitPosition; 6] = [
        DigitPosition::SecondsOnes,
        DigitPosition::SecondsTens,
        DigitPosition::MinutesOnes,
        DigitPosition::MinutesTens,
        DigitPosition::HoursOnes,
        DigitPosition::HoursTens,
    ];

    /// Select line index, 0 = rightmost digit
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Active-low select mask over the six select lines
    ///
    /// Only this position's bit is low: `SecondsOnes` gives `0b111110`,
    /// `HoursTens` gives `0b011111`.
    pub const fn select_mask(self) -> u8 {
        !(1u8 << self.index()) & 0b0011_1111
    }
}

/// Segment lines shared by all six digits
pub trait SegmentBus {
    /// Configure the bus pins as outputs
    fn init(&mut self) -> Result<(), SegmentError> {
        Ok(())
    }

    /// Drive the segment lines; bit 0 is segment `a`, bit 6 is segment `g`
    fn write_pattern(&mut self, pattern: u8) -> Result<(), SegmentError>;
}

/// Digit select lines choosing which position the bus lights
pub trait DigitSelect {
    /// Configure the select pins as outputs
    fn init(&mut self) -> Result<(), SegmentError> {
        Ok(())
    }

    /// Enable exactly one position
    fn select(&mut self, position: DigitPosition) -> Result<(), SegmentError>;

    /// Disable every position
    fn release(&mut self) -> Result<(), SegmentError>;
}

impl<B: SegmentBus + ?Sized> SegmentBus for &mut B {
    fn init(&mut self) -> Result<(), SegmentError> {
        (**self).init()
    }

    fn write_pattern(&mut self, pattern: u8) -> Result<(), SegmentError> {
        (**self).write_pattern(pattern)
    }
}

impl<S: DigitSelect + ?Sized> DigitSelect for &mut S {
    fn init(&mut self) -> Result<(), SegmentError> {
        (**self).init()
    }

    fn select(&mut self, position: DigitPosition) -> Result<(), SegmentError> {
        (**self).select(position)
    }

    fn release(&mut self) -> Result<(), SegmentError> {
        (**self).release()
    }
}
