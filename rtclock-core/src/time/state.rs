//! Clock counters and the one-second tick

use core::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hour format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HourMode {
    /// 12-hour with AM/PM, hours run 1..=12
    H12,
    /// 24-hour, hours run 0..=23
    #[default]
    H24,
}

impl HourMode {
    /// Legal hour values for this mode
    pub const fn hour_range(self) -> RangeInclusive<u8> {
        match self {
            HourMode::H12 => 1..=12,
            HourMode::H24 => 0..=23,
        }
    }

    /// Check whether an entered hour is legal in this mode
    pub fn accepts_hour(self, hours: u8) -> bool {
        self.hour_range().contains(&hours)
    }
}

/// Half of the day in 12-hour mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Period {
    #[default]
    Am,
    Pm,
}

impl Period {
    /// The other half of the day
    pub const fn toggled(self) -> Self {
        match self {
            Period::Am => Period::Pm,
            Period::Pm => Period::Am,
        }
    }

    /// Two-letter label
    pub const fn label(self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

// Bit layout used by `to_bits`/`from_bits`
const MODE_BIT: u32 = 1 << 24;
const PERIOD_BIT: u32 = 1 << 25;
const LATCH_BIT: u32 = 1 << 26;

/// Hours, minutes and seconds plus the 12-hour bookkeeping
///
/// After any [`tick`](TimeState::tick) the counters satisfy
/// `seconds < 60`, `minutes < 60` and the hour range of `mode`. Values
/// written directly (minutes and seconds from setup are not validated) can
/// sit outside those ranges until the next tick normalises them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeState {
    pub seconds: u8,
    pub minutes: u8,
    pub hours: u8,
    pub mode: HourMode,
    pub period: Period,
    /// Set while the clock sits at 12:00:00 after the AM/PM flip,
    /// so the flip happens once per boundary
    pub noon_latch: bool,
}

impl Default for TimeState {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl TimeState {
    /// 00:00:00 in 24-hour mode
    pub const fn zeroed() -> Self {
        Self {
            seconds: 0,
            minutes: 0,
            hours: 0,
            mode: HourMode::H24,
            period: Period::Am,
            noon_latch: false,
        }
    }

    /// Time in 24-hour mode
    pub const fn new_24h(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            seconds,
            minutes,
            hours,
            mode: HourMode::H24,
            period: Period::Am,
            noon_latch: false,
        }
    }

    /// Time in 12-hour mode
    pub const fn new_12h(hours: u8, minutes: u8, seconds: u8, period: Period) -> Self {
        Self {
            seconds,
            minutes,
            hours,
            mode: HourMode::H12,
            period,
            noon_latch: false,
        }
    }

    /// True exactly at 12:00:00
    pub const fn at_noon_boundary(&self) -> bool {
        self.hours == 12 && self.minutes == 0 && self.seconds == 0
    }

    /// Advance by one second
    ///
    /// Every counter is checked on every tick, so an out-of-range minute
    /// value left by setup rolls over on the next tick rather than waiting
    /// for the seconds to wrap.
    pub fn tick(&mut self) {
        self.seconds = self.seconds.wrapping_add(1);
        if self.seconds >= 60 {
            self.seconds = 0;
            self.minutes = self.minutes.wrapping_add(1);
        }

        if self.minutes >= 60 {
            self.minutes = 0;
            self.hours = self.hours.wrapping_add(1);
        }

        match self.mode {
            HourMode::H24 => {
                if self.hours >= 24 {
                    self.hours = 0;
                }
            }
            HourMode::H12 => {
                if self.hours > 12 {
                    self.hours = 1;
                }

                if self.at_noon_boundary() {
                    if !self.noon_latch {
                        self.period = self.period.toggled();
                        self.noon_latch = true;
                    }
                } else {
                    self.noon_latch = false;
                }
            }
        }
    }

    /// Copy advanced by one second
    pub fn ticked(mut self) -> Self {
        self.tick();
        self
    }

    /// Pack into one word for atomic publication
    pub(crate) const fn to_bits(self) -> u32 {
        let mut bits = self.seconds as u32 | (self.minutes as u32) << 8 | (self.hours as u32) << 16;
        if matches!(self.mode, HourMode::H12) {
            bits |= MODE_BIT;
        }
        if matches!(self.period, Period::Pm) {
            bits |= PERIOD_BIT;
        }
        if self.noon_latch {
            bits |= LATCH_BIT;
        }
        bits
    }

    /// Inverse of [`to_bits`](Self::to_bits)
    pub(crate) const fn from_bits(bits: u32) -> Self {
        Self {
            seconds: bits as u8,
            minutes: (bits >> 8) as u8,
            hours: (bits >> 16) as u8,
            mode: if bits & MODE_BIT != 0 {
                HourMode::H12
            } else {
                HourMode::H24
            },
            period: if bits & PERIOD_BIT != 0 {
                Period::Pm
            } else {
                Period::Am
            },
            noon_latch: bits & LATCH_BIT != 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seconds_rollover() {
        let t = TimeState::new_24h(10, 20, 59).ticked();
        assert_eq!((t.hours, t.minutes, t.seconds), (10, 21, 0));
    }

    #[test]
    fn test_minutes_rollover() {
        let t = TimeState::new_24h(10, 59, 59).ticked();
        assert_eq!((t.hours, t.minutes, t.seconds), (11, 0, 0));
    }

    #[test]
    fn test_24h_midnight_wrap() {
        let t = TimeState::new_24h(23, 59, 59).ticked();
        assert_eq!((t.hours, t.minutes, t.seconds), (0, 0, 0));
    }

    #[test]
    fn test_24h_two_ticks_to_midnight() {
        let t = TimeState::new_24h(23, 59, 58).ticked().ticked();
        assert_eq!((t.hours, t.minutes, t.seconds), (0, 0, 0));
    }

    #[test]
    fn test_12h_wraps_to_one_not_zero() {
        let t = TimeState::new_12h(12, 59, 59, Period::Pm).ticked();
        assert_eq!((t.hours, t.minutes, t.seconds), (1, 0, 0));
        assert_eq!(t.period, Period::Pm);
    }

    #[test]
    fn test_12h_flips_once_at_noon() {
        let noon = TimeState::new_12h(11, 59, 59, Period::Am).ticked();
        assert_eq!((noon.hours, noon.minutes, noon.seconds), (12, 0, 0));
        assert_eq!(noon.period, Period::Pm);
        assert!(noon.noon_latch);

        let after = noon.ticked();
        assert_eq!((after.hours, after.minutes, after.seconds), (12, 0, 1));
        assert_eq!(after.period, Period::Pm);
        assert!(!after.noon_latch);
    }

    #[test]
    fn test_12h_flips_pm_to_am_at_midnight() {
        let t = TimeState::new_12h(11, 59, 59, Period::Pm).ticked();
        assert_eq!(t.hours, 12);
        assert_eq!(t.period, Period::Am);
    }

    #[test]
    fn test_latch_blocks_second_flip_at_same_instant() {
        // A tick that lands on 12:00:00 again with the latch still set
        // must not flip a second time.
        let mut t = TimeState::new_12h(11, 59, 59, Period::Am);
        t.tick();
        assert_eq!(t.period, Period::Pm);

        let mut again = t;
        again.hours = 11;
        again.minutes = 59;
        again.seconds = 59;
        again.tick();
        assert_eq!(again.period, Period::Pm);
    }

    #[test]
    fn test_unvalidated_minutes_normalise_on_next_tick() {
        let t = TimeState::new_24h(5, 75, 10).ticked();
        assert_eq!((t.hours, t.minutes, t.seconds), (6, 0, 11));
    }

    #[test]
    fn test_unvalidated_seconds_normalise_on_next_tick() {
        let t = TimeState::new_24h(5, 10, 99).ticked();
        assert_eq!((t.hours, t.minutes, t.seconds), (5, 11, 0));
    }

    #[test]
    fn test_hour_ranges() {
        assert!(HourMode::H24.accepts_hour(0));
        assert!(HourMode::H24.accepts_hour(23));
        assert!(!HourMode::H24.accepts_hour(24));
        assert!(!HourMode::H24.accepts_hour(25));
        assert!(!HourMode::H12.accepts_hour(0));
        assert!(HourMode::H12.accepts_hour(12));
        assert!(!HourMode::H12.accepts_hour(13));
    }

    #[test]
    fn test_bits_preserve_every_field() {
        let mut t = TimeState::new_12h(12, 0, 0, Period::Pm);
        t.noon_latch = true;
        assert_eq!(TimeState::from_bits(t.to_bits()), t);
        assert_eq!(TimeState::from_bits(0), TimeState::zeroed());
    }

    proptest! {
        #[test]
        fn prop_tick_advances_seconds_only(h in 0u8..24, m in 0u8..60, s in 0u8..59) {
            let t = TimeState::new_24h(h, m, s).ticked();
            prop_assert_eq!((t.hours, t.minutes, t.seconds), (h, m, s + 1));
        }

        #[test]
        fn prop_24h_ticks_stay_in_range(h in 0u8..24, m in 0u8..60, s in 0u8..60, n in 0u32..5000) {
            let mut t = TimeState::new_24h(h, m, s);
            for _ in 0..n {
                t.tick();
            }
            prop_assert!(t.seconds < 60);
            prop_assert!(t.minutes < 60);
            prop_assert!(t.hours < 24);
        }

        #[test]
        fn prop_12h_ticks_never_reach_zero(
            h in 1u8..=12,
            m in 0u8..60,
            s in 0u8..60,
            n in 0u32..5000,
        ) {
            let mut t = TimeState::new_12h(h, m, s, Period::Am);
            for _ in 0..n {
                t.tick();
                prop_assert!((1..=12).contains(&t.hours));
            }
        }

        #[test]
        fn prop_12h_one_flip_per_half_day(h in 1u8..=12, m in 0u8..60, s in 0u8..60) {
            // Exactly one flip in any 12-hour window
            let mut t = TimeState::new_12h(h, m, s, Period::Am);
            let mut flips = 0;
            for _ in 0..(12 * 3600) {
                let before = t.period;
                t.tick();
                if t.period != before {
                    flips += 1;
                }
            }
            prop_assert_eq!(flips, 1);
        }
    }
}
