//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Peripherals initialized
    BootComplete,
    /// Operator finished the setup prompts and the time was published
    SetupComplete,
    /// Reset key pressed while the clock was running
    ResetRequested,
}
