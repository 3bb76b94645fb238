//! Text console driver.
//!
//! Drives an 80x25 character grid through the [`DisplaySurface`] capability,
//! tracking the cursor and active color. The grid always reflects exactly
//! the sequence of characters emitted since the last clear, after applying
//! the wrap and scroll rules below.

use basickernel_hal::{Cell, DisplaySurface, TextConsole};
use core::fmt;

/// Number of columns in text mode.
pub const WIDTH: usize = 80;

/// Number of rows in text mode.
pub const HEIGHT: usize = 25;

/// Backspace control byte.
pub const BACKSPACE: u8 = 0x08;

/// VGA color codes.
///
/// Standard 16-color VGA palette for text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

/// Combined foreground and background color attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    /// Creates a new color code from foreground and background colors.
    pub const fn new(foreground: Color, background: Color) -> ColorCode {
        ColorCode((background as u8) << 4 | (foreground as u8))
    }

    /// Returns the raw attribute byte.
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

/// Default color: white text on black background.
const DEFAULT_COLOR: ColorCode = ColorCode::new(Color::White, Color::Black);

/// Text console over a display surface.
///
/// Owns the cursor position and active color. The surface is injected so
/// the driver runs against the real VGA buffer on hardware and an
/// in-memory grid under test.
pub struct Console<S: DisplaySurface> {
    surface: S,
    /// Current column, in `[0, WIDTH)`.
    col: usize,
    /// Current row, in `[0, HEIGHT)`.
    row: usize,
    color: ColorCode,
}

impl<S: DisplaySurface> Console<S> {
    /// Creates a console over the given surface with the cursor homed and
    /// the default color active. Grid contents are left untouched.
    pub fn new(surface: S) -> Self {
        Console {
            surface,
            col: 0,
            row: 0,
            color: DEFAULT_COLOR,
        }
    }

    /// Resets the color to the default and homes the cursor.
    ///
    /// Does not modify the grid contents.
    pub fn init(&mut self) {
        self.color = DEFAULT_COLOR;
        self.col = 0;
        self.row = 0;
    }

    /// Clears the screen by filling every cell with a blank in the current
    /// color, then homes the cursor. Idempotent.
    pub fn clear(&mut self) {
        let blank = Cell::new(b' ', self.color.as_u8());
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                self.surface.write_cell(row, col, blank);
            }
        }
        self.col = 0;
        self.row = 0;
    }

    /// Sets the foreground and background colors for subsequent writes.
    pub fn set_color(&mut self, foreground: Color, background: Color) {
        self.color = ColorCode::new(foreground, background);
    }

    /// Writes a single byte at the cursor position.
    ///
    /// Newline moves to the start of the next row, carriage return to the
    /// start of the current row, and backspace blanks the previous cell on
    /// the same row. Backspace at column 0 is a no-op: it never wraps back
    /// to the previous row. Control bytes other than these three are
    /// silently dropped.
    pub fn put_char(&mut self, byte: u8) {
        match byte {
            b'\n' => {
                self.col = 0;
                self.row += 1;
                self.scroll_if_needed();
            }
            b'\r' => {
                self.col = 0;
            }
            BACKSPACE => {
                if self.col > 0 {
                    self.col -= 1;
                    self.surface
                        .write_cell(self.row, self.col, Cell::new(b' ', self.color.as_u8()));
                }
            }
            byte if byte >= b' ' => {
                self.surface
                    .write_cell(self.row, self.col, Cell::new(byte, self.color.as_u8()));
                self.col += 1;
                if self.col >= WIDTH {
                    self.col = 0;
                    self.row += 1;
                    self.scroll_if_needed();
                }
            }
            _ => {}
        }
    }

    /// Writes a string byte-by-byte through [`Console::put_char`].
    pub fn write_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.put_char(byte);
        }
    }

    /// Scrolls the grid up one row when the cursor has moved past the
    /// bottom.
    ///
    /// Row 0 is discarded, every other row moves up one position, and the
    /// last row is blanked. This is the only mechanism that removes
    /// content from the grid outside of `clear`.
    fn scroll_if_needed(&mut self) {
        if self.row < HEIGHT {
            return;
        }
        for row in 1..HEIGHT {
            for col in 0..WIDTH {
                let cell = self.surface.read_cell(row, col);
                self.surface.write_cell(row - 1, col, cell);
            }
        }
        let blank = Cell::new(b' ', self.color.as_u8());
        for col in 0..WIDTH {
            self.surface.write_cell(HEIGHT - 1, col, blank);
        }
        self.row = HEIGHT - 1;
    }

    /// Current cursor column.
    pub fn column(&self) -> usize {
        self.col
    }

    /// Current cursor row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Borrows the underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: DisplaySurface> fmt::Write for Console<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Console::write_str(self, s);
        Ok(())
    }
}

impl<S: DisplaySurface> TextConsole for Console<S> {
    fn write_str(&mut self, s: &str) {
        Console::write_str(self, s);
    }

    fn clear(&mut self) {
        Console::clear(self);
    }
}
