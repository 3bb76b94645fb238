//! basicKernel Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines traits that abstract away platform-specific hardware
//! details, so the console and keyboard drivers can be exercised against
//! in-memory fakes as well as real hardware.

#![no_std]

/// One character position on a text display.
///
/// Packs a character code and a color attribute, matching the layout of a
/// VGA text mode cell (character byte, attribute byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Cell {
    /// Character code stored in the cell.
    pub glyph: u8,
    /// Color attribute (low nibble foreground, high nibble background).
    pub attr: u8,
}

impl Cell {
    /// Creates a cell from a character code and color attribute.
    pub const fn new(glyph: u8, attr: u8) -> Cell {
        Cell { glyph, attr }
    }
}

/// Trait for a fixed-size memory-mapped text display surface.
///
/// Implementations expose row-major cell access; callers guarantee that
/// `row` and `col` stay within the surface dimensions.
pub trait DisplaySurface {
    /// Writes one cell at the given position.
    fn write_cell(&mut self, row: usize, col: usize, cell: Cell);
    /// Reads back the cell at the given position.
    fn read_cell(&self, row: usize, col: usize) -> Cell;
}

/// Trait for byte-wide port I/O.
///
/// Abstracts the `in` instruction so drivers can be fed scripted bytes
/// under test instead of touching real hardware ports.
pub trait PortIo {
    /// Reads a single byte from the given I/O port.
    fn read_byte(&mut self, port: u16) -> u8;
}

/// Trait for a text-based console output.
pub trait TextConsole {
    /// Writes a string to the console.
    fn write_str(&mut self, s: &str);
    /// Clears the console screen.
    fn clear(&mut self);
}
