//! Time state shared between the tick interrupt and the foreground loop
//!
//! The whole [`TimeState`] is packed into one atomic word together with the
//! tick gate. Every tick is a single read-modify-write on that word, so a
//! reader either sees the state before a tick or after it, never a
//! half-applied rollover, and a tick can neither overwrite a concurrent
//! [`publish`](SharedClock::publish) nor slip past
//! [`suspend_ticks`](SharedClock::suspend_ticks).

use portable_atomic::{AtomicU32, Ordering};

use super::state::TimeState;

/// Set while ticks are suspended; outside the bits `TimeState` packs into
const SUSPENDED_BIT: u32 = 1 << 31;

/// Process-wide clock state
///
/// Usually placed in a `static` so the timer interrupt can reach it:
///
/// ```
/// use rtclock_core::SharedClock;
///
/// static CLOCK: SharedClock = SharedClock::new();
///
/// // timer interrupt
/// CLOCK.on_tick();
/// ```
#[derive(Debug)]
pub struct SharedClock {
    word: AtomicU32,
}

impl Default for SharedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedClock {
    /// Zeroed 24-hour clock with ticking enabled
    pub const fn new() -> Self {
        Self {
            word: AtomicU32::new(TimeState::zeroed().to_bits()),
        }
    }

    /// Consistent copy of every field
    pub fn snapshot(&self) -> TimeState {
        TimeState::from_bits(self.word.load(Ordering::Acquire) & !SUSPENDED_BIT)
    }

    /// Replace the whole state at once, keeping the tick gate as it is
    pub fn publish(&self, time: TimeState) {
        let _ = self
            .word
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |word| {
                Some(time.to_bits() | (word & SUSPENDED_BIT))
            });
    }

    /// Advance by one second
    ///
    /// Returns `false` without touching the state while ticking is
    /// suspended.
    pub fn on_tick(&self) -> bool {
        self.word
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |word| {
                if word & SUSPENDED_BIT != 0 {
                    None
                } else {
                    Some(TimeState::from_bits(word).ticked().to_bits())
                }
            })
            .is_ok()
    }

    /// Ignore ticks until [`resume_ticks`](Self::resume_ticks)
    pub fn suspend_ticks(&self) {
        self.word.fetch_or(SUSPENDED_BIT, Ordering::AcqRel);
    }

    /// Apply ticks again
    pub fn resume_ticks(&self) {
        self.word.fetch_and(!SUSPENDED_BIT, Ordering::AcqRel);
    }

    /// Check whether ticks are currently applied
    pub fn is_ticking(&self) -> bool {
        self.word.load(Ordering::Acquire) & SUSPENDED_BIT == 0
    }
}
