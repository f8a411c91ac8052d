//! Character LCD trait for the setup prompts

/// Number of text rows on the LCD
pub const LCD_ROWS: u8 = 2;

/// Number of character columns on the LCD
pub const LCD_COLS: u8 = 16;

/// Errors that can occur driving the LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication with the LCD controller failed
    Communication,
    /// Cursor position outside the 2x16 grid
    InvalidCoordinates,
    /// Display used before `init`
    NotInitialized,
    /// Text does not fit on a line
    BufferOverflow,
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::Communication => write!(f, "LCD communication failed"),
            DisplayError::InvalidCoordinates => write!(f, "cursor position outside the LCD"),
            DisplayError::NotInitialized => write!(f, "LCD not initialized"),
            DisplayError::BufferOverflow => write!(f, "text does not fit on an LCD line"),
        }
    }
}

/// Character LCD
///
/// Rows and columns are 1-based: `row` in `1..=2`, `col` in `1..=16`.
/// Command encoding and bus timing belong to the implementation.
pub trait CharDisplay {
    /// Bring the controller up
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Clear the screen and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write one character at the cursor
    fn write_char(&mut self, c: char) -> Result<(), DisplayError>;

    /// Write a string at the cursor
    fn write_str(&mut self, s: &str) -> Result<(), DisplayError> {
        for c in s.chars() {
            self.write_char(c)?;
        }
        Ok(())
    }

    /// Move the cursor
    fn move_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError>;
}

impl<D: CharDisplay + ?Sized> CharDisplay for &mut D {
    fn init(&mut self) -> Result<(), DisplayError> {
        (**self).init()
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        (**self).clear()
    }

    fn write_char(&mut self, c: char) -> Result<(), DisplayError> {
        (**self).write_char(c)
    }

    fn write_str(&mut self, s: &str) -> Result<(), DisplayError> {
        (**self).write_str(s)
    }

    fn move_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        (**self).move_cursor(row, col)
    }
}

/// Helpers for the prompt screens
pub trait CharDisplayExt: CharDisplay {
    /// Move the cursor after checking the position against the 2x16 grid
    fn goto(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        if !(1..=LCD_ROWS).contains(&row) || !(1..=LCD_COLS).contains(&col) {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.move_cursor(row, col)
    }

    /// Clear, write a title on row 1 and park the cursor at the start of row 2
    fn prompt(&mut self, title: &str) -> Result<(), DisplayError> {
        self.clear()?;
        self.write_str(title)?;
        self.goto(2, 1)
    }

    /// Overwrite a whole row, padding with spaces
    fn show_line(&mut self, row: u8, text: &str) -> Result<(), DisplayError> {
        if text.len() > LCD_COLS as usize {
            return Err(DisplayError::BufferOverflow);
        }

        self.goto(row, 1)?;
        self.write_str(text)?;
        for _ in text.len()..LCD_COLS as usize {
            self.write_char(' ')?;
        }
        Ok(())
    }
}

// Blanket implementation for all CharDisplay types
impl<T: CharDisplay + ?Sized> CharDisplayExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockLcd;

    #[test]
    fn test_goto_rejects_outside_grid() {
        let mut lcd = MockLcd::new();
        assert_eq!(lcd.goto(0, 1), Err(DisplayError::InvalidCoordinates));
        assert_eq!(lcd.goto(3, 1), Err(DisplayError::InvalidCoordinates));
        assert_eq!(lcd.goto(1, 17), Err(DisplayError::InvalidCoordinates));
        assert_eq!(lcd.goto(2, 16), Ok(()));
    }

    #[test]
    fn test_prompt_leaves_cursor_on_second_row() {
        let mut lcd = MockLcd::new();
        lcd.prompt("Set Hours:").unwrap();
        lcd.write_str("23").unwrap();

        assert_eq!(lcd.row(1).trim_end(), "Set Hours:");
        assert_eq!(lcd.row(2).trim_end(), "23");
    }

    #[test]
    fn test_show_line_pads_row() {
        let mut lcd = MockLcd::new();
        lcd.show_line(1, "12h Mode  AM").unwrap();
        lcd.show_line(1, "24h Mode").unwrap();
        assert_eq!(lcd.row(1), "24h Mode        ");
    }

    #[test]
    fn test_show_line_rejects_long_text() {
        let mut lcd = MockLcd::new();
        assert_eq!(
            lcd.show_line(1, "seventeen chars!!"),
            Err(DisplayError::BufferOverflow)
        );
    }
}
