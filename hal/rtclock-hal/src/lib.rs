//! rtclock Hardware Abstraction Layer
//!
//! This crate defines the pin-level traits that chip-specific code
//! implements so the clock drivers can run on any board.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  rtclock-core (timekeeping, setup, mux) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rtclock-drivers (segment bus, select)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  rtclock-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`port::OutputPort`] - Parallel writes to a group of pins

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod port;

pub use gpio::{Level, OutputPin};
pub use port::{OutputPort, PortWidth};
