//! Software multiplexing of the six seven-segment digits

pub mod frame;
pub mod multiplexer;

pub use frame::{pattern_for, DisplayFrame, SEGMENT_PATTERNS};
pub use multiplexer::{Multiplexer, PassOutcome};
