//! Board-agnostic core logic for the seven-segment real-time clock
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Time state, the one-second tick and its rollover rules
//! - A lock-free shared clock the tick interrupt publishes into
//! - Peripheral traits (keypad, character LCD, segment bus, digit select)
//! - Two-digit keypad entry
//! - The per-session setup sequencer
//! - The software display multiplexer
//! - The session state machine and the clock runner tying it together
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Must go first so the other modules see the logging macros.
mod fmt;

pub mod clock;
pub mod config;
pub mod error;
pub mod input;
pub mod multiplex;
pub mod panel;
pub mod setup;
pub mod state;
pub mod time;
pub mod traits;

#[cfg(test)]
mod mock;

pub use clock::Clock;
pub use config::{ClockConfig, ModePolicy, TickTiming, Timings};
pub use error::ClockError;
pub use panel::Panel;
pub use time::{HourMode, Period, SharedClock, TimeState};
