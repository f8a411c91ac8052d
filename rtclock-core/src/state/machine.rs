//! State machine definition
//!
//! Whether ticks are applied is a function of the current state and the
//! tick gating configuration.

use super::events::Event;

/// Clock states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Power-on, peripherals not initialized yet
    Boot,
    /// Setup prompts on the LCD
    Setup,
    /// Time published, digits multiplexed
    Running,
}

impl State {
    /// Check if ticks should advance the clock in this state
    ///
    /// With `gate_during_setup` off, ticks run in every state and the timer
    /// interrupt is never masked.
    pub fn ticks_allowed(&self, gate_during_setup: bool) -> bool {
        match self {
            State::Running => true,
            State::Boot | State::Setup => !gate_during_setup,
        }
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Boot, BootComplete) => Setup,
            (Setup, SetupComplete) => Running,
            (Running, ResetRequested) => Setup,

            // Default: stay in current state
            _ => self,
        }
    }
}
