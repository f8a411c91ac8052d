//! LCD texts for the setup flow and the running clock

use core::fmt::Write;

use heapless::String;

use crate::time::{HourMode, Period, TimeState};
use crate::traits::{CharDisplay, CharDisplayExt, DisplayError, LCD_COLS};

pub const MODE_TITLE: &str = "Select Mode:";
pub const MODE_CHOICES: &str = "1=12h  2=24h";
pub const PERIOD_TITLE: &str = "Select Period:";
pub const PERIOD_CHOICES: &str = "1=AM  2=PM";
pub const HOURS_TITLE: &str = "Set Hours:";
pub const MINUTES_TITLE: &str = "Set Minutes:";
pub const SECONDS_TITLE: &str = "Set Seconds:";
pub const RETRY_NOTICE: &str = "Invalid! Retry";

/// One LCD row of text
pub type Line = String<{ LCD_COLS as usize }>;

/// First row of the running screen: the mode, plus AM/PM in 12-hour mode
pub const fn summary_line(time: &TimeState) -> &'static str {
    match (time.mode, time.period) {
        (HourMode::H24, _) => "24h Mode",
        (HourMode::H12, Period::Am) => "12h Mode  AM",
        (HourMode::H12, Period::Pm) => "12h Mode  PM",
    }
}

/// Second row of the running screen
pub fn reset_line(reset_key: u8) -> Result<Line, DisplayError> {
    let mut line = Line::new();
    write!(line, "Press {} to Reset", reset_key as char)
        .map_err(|_| DisplayError::BufferOverflow)?;
    Ok(line)
}

/// Draw the running screen
pub fn show_ready<L>(lcd: &mut L, time: &TimeState, reset_key: u8) -> Result<(), DisplayError>
where
    L: CharDisplay + ?Sized,
{
    lcd.clear()?;
    lcd.show_line(1, summary_line(time))?;
    lcd.show_line(2, &reset_line(reset_key)?)
}

/// Two-line menu: title on row 1, choices on row 2
pub fn show_menu<L>(lcd: &mut L, title: &str, choices: &str) -> Result<(), DisplayError>
where
    L: CharDisplay + ?Sized,
{
    lcd.prompt(title)?;
    lcd.write_str(choices)
}
