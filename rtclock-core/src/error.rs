//! Errors surfaced by the clock runner

use crate::config::ConfigError;
use crate::traits::{DisplayError, SegmentError};

/// Anything that stops the clock
///
/// Operator mistakes never show up here; they are handled by the retry
/// prompts. Only collaborator failures and bad configuration do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Character LCD failure
    Display(DisplayError),
    /// Seven-segment bus or select failure
    Segment(SegmentError),
    /// Configuration rejected at startup
    Config(ConfigError),
}

impl From<DisplayError> for ClockError {
    fn from(err: DisplayError) -> Self {
        ClockError::Display(err)
    }
}

impl From<SegmentError> for ClockError {
    fn from(err: SegmentError) -> Self {
        ClockError::Segment(err)
    }
}

impl From<ConfigError> for ClockError {
    fn from(err: ConfigError) -> Self {
        ClockError::Config(err)
    }
}

impl core::fmt::Display for ClockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClockError::Display(err) => write!(f, "display: {}", err),
            ClockError::Segment(err) => write!(f, "seven-segment: {}", err),
            ClockError::Config(err) => write!(f, "config: {}", err),
        }
    }
}
