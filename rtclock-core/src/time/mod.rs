//! Timekeeping
//!
//! [`TimeState`] holds the counters and the tick rules. [`SharedClock`]
//! publishes it between the tick interrupt and the foreground loop.

pub mod shared;
pub mod state;

pub use shared::SharedClock;
pub use state::{HourMode, Period, TimeState};
