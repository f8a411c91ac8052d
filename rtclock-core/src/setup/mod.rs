//! Per-session setup flow
//!
//! Collects the mode, AM/PM, hours, minutes and seconds from the keypad
//! and produces the [`TimeState`](crate::time::TimeState) the clock starts
//! from.

pub mod screens;
pub mod sequencer;

pub use sequencer::{SetupSequencer, SetupStep};
