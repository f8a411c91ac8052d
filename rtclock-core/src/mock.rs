//! Mock peripherals for the unit tests

use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::panel::Panel;
use crate::traits::{
    CharDisplay, DigitPosition, DigitSelect, DisplayError, Keypad, SegmentBus, SegmentError,
    LCD_COLS, LCD_ROWS,
};

/// Polls allowed on an empty script before the test is declared hung
const IDLE_POLL_LIMIT: usize = 100_000;

/// Keypad replaying a script of polls
///
/// `None` entries are polls with no key down. Once the script runs out
/// every poll returns `None`.
pub struct MockKeypad {
    script: VecDeque<Option<u8>>,
    idle_polls: usize,
    pub polls: usize,
}

impl MockKeypad {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            idle_polls: 0,
            polls: 0,
        }
    }

    /// Press and release each key of `keys` in turn
    pub fn keys(mut self, keys: &str) -> Self {
        for key in keys.bytes() {
            self.script.push_back(Some(key));
            self.script.push_back(None);
        }
        self
    }

    /// Key held down for `polls` consecutive polls, then released
    pub fn hold(mut self, key: u8, polls: usize) -> Self {
        for _ in 0..polls {
            self.script.push_back(Some(key));
        }
        self.script.push_back(None);
        self
    }

    /// Polls with nothing pressed
    pub fn idle(mut self, polls: usize) -> Self {
        for _ in 0..polls {
            self.script.push_back(None);
        }
        self
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Keypad for MockKeypad {
    fn poll(&mut self) -> Option<u8> {
        self.polls += 1;
        match self.script.pop_front() {
            Some(entry) => entry,
            None => {
                self.idle_polls += 1;
                assert!(
                    self.idle_polls < IDLE_POLL_LIMIT,
                    "keypad script exhausted while waiting for a key"
                );
                None
            }
        }
    }
}

/// 2x16 LCD keeping the visible text and a log of everything written
pub struct MockLcd {
    rows: [[char; LCD_COLS as usize]; LCD_ROWS as usize],
    cursor: (usize, usize),
    pub log: String,
    pub clears: usize,
    pub initialized: bool,
    pub fail: bool,
}

impl MockLcd {
    pub fn new() -> Self {
        Self {
            rows: [[' '; LCD_COLS as usize]; LCD_ROWS as usize],
            cursor: (0, 0),
            log: String::new(),
            clears: 0,
            initialized: false,
            fail: false,
        }
    }

    /// Visible text of a 1-based row
    pub fn row(&self, row: usize) -> String {
        self.rows[row - 1].iter().collect()
    }

    fn check(&self) -> Result<(), DisplayError> {
        if self.fail {
            Err(DisplayError::Communication)
        } else {
            Ok(())
        }
    }
}

impl CharDisplay for MockLcd {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.check()?;
        self.initialized = true;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.check()?;
        self.rows = [[' '; LCD_COLS as usize]; LCD_ROWS as usize];
        self.cursor = (0, 0);
        self.clears += 1;
        Ok(())
    }

    fn write_char(&mut self, c: char) -> Result<(), DisplayError> {
        self.check()?;
        let (row, col) = self.cursor;
        if col < LCD_COLS as usize {
            self.rows[row][col] = c;
        }
        self.cursor.1 += 1;
        self.log.push(c);
        Ok(())
    }

    fn move_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        self.check()?;
        self.cursor = (row as usize - 1, col as usize - 1);
        Ok(())
    }
}

/// Segment bus recording every pattern written
pub struct MockBus {
    pub patterns: Vec<u8>,
    pub initialized: bool,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
            initialized: false,
        }
    }
}

impl SegmentBus for MockBus {
    fn init(&mut self) -> Result<(), SegmentError> {
        self.initialized = true;
        Ok(())
    }

    fn write_pattern(&mut self, pattern: u8) -> Result<(), SegmentError> {
        self.patterns.push(pattern);
        Ok(())
    }
}

/// Digit select recording every selected position
pub struct MockSelect {
    pub selected: Vec<DigitPosition>,
    pub releases: usize,
    pub initialized: bool,
}

impl MockSelect {
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
            releases: 0,
            initialized: false,
        }
    }
}

impl DigitSelect for MockSelect {
    fn init(&mut self) -> Result<(), SegmentError> {
        self.initialized = true;
        Ok(())
    }

    fn select(&mut self, position: DigitPosition) -> Result<(), SegmentError> {
        self.selected.push(position);
        Ok(())
    }

    fn release(&mut self) -> Result<(), SegmentError> {
        self.releases += 1;
        Ok(())
    }
}

/// Delay that only adds up the requested time
pub struct MockDelay {
    pub total_ns: u64,
    pub calls_ms: Vec<u32>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self {
            total_ns: 0,
            calls_ms: Vec::new(),
        }
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls_ms.push(ms);
        self.total_ns += ms as u64 * 1_000_000;
    }
}

pub type MockPanel = Panel<MockKeypad, MockLcd, MockBus, MockSelect, MockDelay>;

/// Panel of fresh mocks around a scripted keypad
pub fn mock_panel(keypad: MockKeypad) -> MockPanel {
    Panel::new(
        keypad,
        MockLcd::new(),
        MockBus::new(),
        MockSelect::new(),
        MockDelay::new(),
    )
}
