//! Configuration type definitions

use crate::time::HourMode;

use super::timing::TickTiming;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default key that leaves the running clock and restarts setup
pub const DEFAULT_RESET_KEY: u8 = b'0';

/// How the hour format is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ModePolicy {
    /// Always run in this mode, the mode prompt is skipped
    Fixed(HourMode),
    /// Ask the operator every session
    #[default]
    Selectable,
}

/// Busy-wait intervals used by the foreground loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timings {
    /// Pause after each accepted digit key (ms)
    pub debounce_ms: u32,
    /// How long "Invalid! Retry" stays up (ms)
    pub retry_notice_ms: u32,
    /// How long each digit stays lit during multiplexing (ms)
    pub digit_settle_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            retry_notice_ms: 900,
            digit_settle_ms: 2,
        }
    }
}

/// Clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    /// Hour format selection
    pub mode: ModePolicy,
    /// Reject out-of-range hours during setup
    pub validate_hours: bool,
    /// Drop ticks while the setup prompts run
    pub gate_ticks_during_setup: bool,
    /// Key that restarts setup from the running clock
    pub reset_key: u8,
    /// Busy-wait intervals
    pub timings: Timings,
    /// Hardware timer producing the tick
    pub tick: TickTiming,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::selectable()
    }
}

impl ClockConfig {
    /// 24-hour-only clock with hour validation
    pub fn fixed_24h() -> Self {
        Self {
            mode: ModePolicy::Fixed(HourMode::H24),
            validate_hours: true,
            gate_ticks_during_setup: true,
            reset_key: DEFAULT_RESET_KEY,
            timings: Timings::default(),
            tick: TickTiming::TIMER2_ASYNC,
        }
    }

    /// 12/24-hour clock asking for the mode every session
    pub fn selectable() -> Self {
        Self {
            mode: ModePolicy::Selectable,
            ..Self::fixed_24h()
        }
    }

    /// 24-hour bring-up variant without hour validation
    pub fn prototype() -> Self {
        Self {
            validate_hours: false,
            ..Self::fixed_24h()
        }
    }

    /// Check the configuration for values the clock cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.reset_key.is_ascii_graphic() {
            return Err(ConfigError::InvalidResetKey);
        }

        if self.timings.digit_settle_ms == 0 {
            return Err(ConfigError::ZeroSettleTime);
        }

        self.tick.validate()
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Reset key is not a printable ASCII character
    InvalidResetKey,
    /// Digit settle time of zero would leave every digit dark
    ZeroSettleTime,
    /// Tick timer source clock, prescaler or count is zero
    DegenerateTickTimer,
    /// Tick timer period is not exactly one second
    TickNotOneSecond,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidResetKey => write!(f, "reset key must be printable ASCII"),
            ConfigError::ZeroSettleTime => write!(f, "digit settle time must be non-zero"),
            ConfigError::DegenerateTickTimer => {
                write!(f, "tick timer clock, prescaler and count must be non-zero")
            }
            ConfigError::TickNotOneSecond => {
                write!(f, "tick timer period must be exactly one second")
            }
        }
    }
}
