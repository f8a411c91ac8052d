//! Hardware tick timer settings
//!
//! The tick comes from an 8-bit overflow timer. One overflow happens every
//! `prescaler * counts` cycles of the timer's source clock, so the tick is
//! exactly one second only when that product equals the source frequency.
//! With an 8 MHz CPU clock no prescaler/count pair gets there, which is why
//! the board clocks the timer asynchronously from a 32.768 kHz watch
//! crystal.

use super::types::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Overflow timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickTiming {
    /// Timer source clock (Hz)
    pub source_hz: u32,
    /// Clock prescaler
    pub prescaler: u16,
    /// Timer counts per overflow
    pub counts: u16,
}

impl TickTiming {
    /// Timer2 in asynchronous mode: 32.768 kHz crystal, /128, 256 counts
    pub const TIMER2_ASYNC: Self = Self::new(32_768, 128, 256);

    pub const fn new(source_hz: u32, prescaler: u16, counts: u16) -> Self {
        Self {
            source_hz,
            prescaler,
            counts,
        }
    }

    /// Timer cycles between two ticks
    pub const fn cycles_per_tick(&self) -> u64 {
        self.prescaler as u64 * self.counts as u64
    }

    /// Tick period in microseconds, `None` for a zero source clock
    pub const fn period_us(&self) -> Option<u64> {
        if self.source_hz == 0 {
            None
        } else {
            Some(self.cycles_per_tick() * 1_000_000 / self.source_hz as u64)
        }
    }

    /// Check that the timer ticks exactly once per second
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_hz == 0 || self.prescaler == 0 || self.counts == 0 {
            return Err(ConfigError::DegenerateTickTimer);
        }

        if self.cycles_per_tick() != self.source_hz as u64 {
            return Err(ConfigError::TickNotOneSecond);
        }

        Ok(())
    }
}

impl Default for TickTiming {
    fn default() -> Self {
        Self::TIMER2_ASYNC
    }
}
