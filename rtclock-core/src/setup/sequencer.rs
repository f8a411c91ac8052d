//! Setup state machine
//!
//! Steps run strictly in order and each one blocks on the keypad:
//!
//! ```text
//! ChooseMode ──► ChoosePeriod ──► SetHours ──► SetMinutes ──► SetSeconds ──► Ready
//!     │              ▲  (12h only)     ▲
//!     └──────────────┴─────────────────┘ (24h skips ChoosePeriod)
//! ```
//!
//! `ChooseMode` is skipped when the configuration fixes the mode.

use embedded_hal::delay::DelayNs;

use crate::config::{ClockConfig, ModePolicy};
use crate::error::ClockError;
use crate::input::{drain, wait_for_key, DigitReader};
use crate::panel::Panel;
use crate::time::{HourMode, Period, TimeState};
use crate::traits::{CharDisplay, CharDisplayExt, Keypad};

use super::screens;

/// Menu key for the first choice
const CHOICE_ONE: u8 = b'1';
/// Menu key for the second choice
const CHOICE_TWO: u8 = b'2';

/// Setup steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupStep {
    ChooseMode,
    ChoosePeriod,
    SetHours,
    SetMinutes,
    SetSeconds,
    Ready,
}

/// Runs one setup pass
///
/// The sequencer fills a private draft and never touches the shared clock;
/// the caller publishes the finished draft in one write.
#[derive(Debug, Clone)]
pub struct SetupSequencer {
    config: ClockConfig,
    reader: DigitReader,
    step: SetupStep,
    draft: TimeState,
}

impl SetupSequencer {
    /// Start a fresh session
    pub fn new(config: &ClockConfig) -> Self {
        let (step, mode) = match config.mode {
            ModePolicy::Selectable => (SetupStep::ChooseMode, HourMode::H24),
            ModePolicy::Fixed(HourMode::H12) => (SetupStep::ChoosePeriod, HourMode::H12),
            ModePolicy::Fixed(HourMode::H24) => (SetupStep::SetHours, HourMode::H24),
        };

        let mut draft = TimeState::zeroed();
        draft.mode = mode;

        Self {
            config: *config,
            reader: DigitReader::new(config.timings.debounce_ms),
            step,
            draft,
        }
    }

    /// Step that the next [`advance`](Self::advance) will run
    pub fn step(&self) -> SetupStep {
        self.step
    }

    /// Values collected so far
    pub fn draft(&self) -> &TimeState {
        &self.draft
    }

    /// Run the current step to completion and move to the next one
    ///
    /// Returns the new step. Calling this in `Ready` does nothing.
    pub fn advance<K, L, B, S, D>(
        &mut self,
        panel: &mut Panel<K, L, B, S, D>,
    ) -> Result<SetupStep, ClockError>
    where
        K: Keypad,
        L: CharDisplay,
        D: DelayNs,
    {
        self.step = match self.step {
            SetupStep::ChooseMode => {
                screens::show_menu(&mut panel.lcd, screens::MODE_TITLE, screens::MODE_CHOICES)?;
                let mode = match choose(&mut panel.keypad) {
                    CHOICE_ONE => HourMode::H12,
                    _ => HourMode::H24,
                };
                info!("mode chosen: {}", mode);
                self.draft.mode = mode;

                match mode {
                    HourMode::H12 => SetupStep::ChoosePeriod,
                    HourMode::H24 => SetupStep::SetHours,
                }
            }
            SetupStep::ChoosePeriod => {
                screens::show_menu(
                    &mut panel.lcd,
                    screens::PERIOD_TITLE,
                    screens::PERIOD_CHOICES,
                )?;
                let period = match choose(&mut panel.keypad) {
                    CHOICE_ONE => Period::Am,
                    _ => Period::Pm,
                };
                info!("period chosen: {}", period);
                self.draft.period = period;
                SetupStep::SetHours
            }
            SetupStep::SetHours => {
                self.draft.hours = self.read_hours(panel)?;
                SetupStep::SetMinutes
            }
            SetupStep::SetMinutes => {
                // Not range checked: 60..=99 is accepted and normalised by
                // the first tick.
                self.draft.minutes = self.read_value(panel, screens::MINUTES_TITLE)?;
                SetupStep::SetSeconds
            }
            SetupStep::SetSeconds => {
                self.draft.seconds = self.read_value(panel, screens::SECONDS_TITLE)?;
                self.draft.noon_latch =
                    self.draft.mode == HourMode::H12 && self.draft.at_noon_boundary();
                SetupStep::Ready
            }
            SetupStep::Ready => SetupStep::Ready,
        };

        Ok(self.step)
    }

    /// Run every remaining step, draw the running screen and return the
    /// collected time
    pub fn run<K, L, B, S, D>(
        mut self,
        panel: &mut Panel<K, L, B, S, D>,
    ) -> Result<TimeState, ClockError>
    where
        K: Keypad,
        L: CharDisplay,
        D: DelayNs,
    {
        while self.step != SetupStep::Ready {
            self.advance(panel)?;
        }

        screens::show_ready(&mut panel.lcd, &self.draft, self.config.reset_key)?;
        info!(
            "setup complete: {=u8}:{=u8}:{=u8}",
            self.draft.hours,
            self.draft.minutes,
            self.draft.seconds
        );
        Ok(self.draft)
    }

    /// Hours entry, repeated until the value fits the mode
    fn read_hours<K, L, B, S, D>(&self, panel: &mut Panel<K, L, B, S, D>) -> Result<u8, ClockError>
    where
        K: Keypad,
        L: CharDisplay,
        D: DelayNs,
    {
        panel.lcd.prompt(screens::HOURS_TITLE)?;

        loop {
            let hours = self
                .reader
                .read_two_digit_value(&mut panel.keypad, &mut panel.lcd, &mut panel.delay)?;

            if !self.config.validate_hours || self.draft.mode.accepts_hour(hours) {
                drain(&mut panel.keypad);
                return Ok(hours);
            }

            warn!("hour {=u8} rejected in {} mode", hours, self.draft.mode);
            panel.lcd.clear()?;
            panel.lcd.write_str(screens::RETRY_NOTICE)?;
            panel.delay.delay_ms(self.config.timings.retry_notice_ms);
            panel.lcd.prompt(screens::HOURS_TITLE)?;
        }
    }

    /// Unchecked two-digit entry under a prompt
    fn read_value<K, L, B, S, D>(
        &self,
        panel: &mut Panel<K, L, B, S, D>,
        title: &str,
    ) -> Result<u8, ClockError>
    where
        K: Keypad,
        L: CharDisplay,
        D: DelayNs,
    {
        panel.lcd.prompt(title)?;
        let value = self
            .reader
            .read_two_digit_value(&mut panel.keypad, &mut panel.lcd, &mut panel.delay)?;
        drain(&mut panel.keypad);
        Ok(value)
    }
}

/// Wait for `1` or `2`, then clear any key still queued
fn choose<K: Keypad>(keypad: &mut K) -> u8 {
    let key = wait_for_key(keypad, |key| key == CHOICE_ONE || key == CHOICE_TWO);
    drain(keypad);
    key
}
