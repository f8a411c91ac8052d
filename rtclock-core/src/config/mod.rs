//! Configuration types
//!
//! Board-agnostic clock configuration: which program variant runs, the
//! busy-wait timings and the hardware tick timer settings.

pub mod timing;
pub mod types;

pub use timing::TickTiming;
pub use types::*;
