//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the segment traits
//! defined in rtclock-core on top of the pin traits from rtclock-hal:
//!
//! - Pin adapters (embedded-hal output pins, groups of pins as a port)
//! - Seven-segment bus (common cathode or common anode)
//! - Digit select lines (active low or active high)
//! - Tick task for embassy-based boards (`embassy` feature)

#![no_std]
#![deny(unsafe_code)]

pub mod pins;
pub mod port;
pub mod segment;
pub mod select;
#[cfg(feature = "embassy")]
pub mod tick;

pub use pins::EmbeddedHalPin;
pub use port::PinPort;
pub use segment::PortSegmentBus;
pub use select::PortDigitSelect;
