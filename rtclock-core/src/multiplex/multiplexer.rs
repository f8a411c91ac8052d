//! Running-clock display loop
//!
//! One pass lights each of the six digits in turn for the settle interval.
//! Only one digit is on at any instant; the loop runs fast enough for the
//! eye to see all six. The keypad is checked once per pass for the reset
//! key.

use embedded_hal::delay::DelayNs;

use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::panel::Panel;
use crate::setup::screens::summary_line;
use crate::time::{HourMode, SharedClock, TimeState};
use crate::traits::{CharDisplay, CharDisplayExt, DigitSelect, Keypad, SegmentBus};

use super::frame::DisplayFrame;

/// Result of one pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PassOutcome {
    /// Keep multiplexing
    Continue,
    /// Reset key pressed, nothing was drawn
    Reset,
}

/// Display multiplexer for one running session
#[derive(Debug, Clone)]
pub struct Multiplexer {
    reset_key: u8,
    settle_ms: u32,
    /// Latch value seen on the previous pass
    last_latch: bool,
}

impl Multiplexer {
    /// Create a multiplexer for a session starting at `start`
    pub fn new(config: &ClockConfig, start: &TimeState) -> Self {
        Self {
            reset_key: config.reset_key,
            settle_ms: config.timings.digit_settle_ms,
            last_latch: start.noon_latch,
        }
    }

    /// One multiplexing pass
    pub fn pass<K, L, B, S, D>(
        &mut self,
        clock: &SharedClock,
        panel: &mut Panel<K, L, B, S, D>,
    ) -> Result<PassOutcome, ClockError>
    where
        K: Keypad,
        L: CharDisplay,
        B: SegmentBus,
        S: DigitSelect,
        D: DelayNs,
    {
        if panel.keypad.poll() == Some(self.reset_key) {
            return Ok(PassOutcome::Reset);
        }

        let now = clock.snapshot();
        for (position, pattern) in DisplayFrame::from_time(&now).patterns() {
            panel.select.select(position)?;
            panel.segments.write_pattern(pattern)?;
            panel.delay.delay_ms(self.settle_ms);
        }

        // The period only changes when the latch rises, so redraw the
        // summary on that pass and leave the LCD alone otherwise.
        if now.mode == HourMode::H12 && now.noon_latch && !self.last_latch {
            debug!("period now {}", now.period);
            panel.lcd.show_line(1, summary_line(&now))?;
        }
        self.last_latch = now.noon_latch;

        Ok(PassOutcome::Continue)
    }

    /// Multiplex until the reset key is pressed, then blank the digits
    pub fn run<K, L, B, S, D>(
        &mut self,
        clock: &SharedClock,
        panel: &mut Panel<K, L, B, S, D>,
    ) -> Result<(), ClockError>
    where
        K: Keypad,
        L: CharDisplay,
        B: SegmentBus,
        S: DigitSelect,
        D: DelayNs,
    {
        while self.pass(clock, panel)? == PassOutcome::Continue {}

        info!("reset requested");
        panel.select.release()?;
        Ok(())
    }
}
