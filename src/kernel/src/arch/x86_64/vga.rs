//! VGA text mode display surface.
//!
//! Exposes the memory-mapped text buffer at 0xB8000 through the
//! [`DisplaySurface`] capability so the console driver stays hardware
//! agnostic.

use crate::console::{HEIGHT, WIDTH};
use basickernel_hal::{Cell, DisplaySurface};
use core::ptr;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// The VGA text buffer layout: row-major cells, character byte then
/// attribute byte.
#[repr(transparent)]
struct Buffer {
    cells: [[Cell; WIDTH]; HEIGHT],
}

/// Display surface backed by the VGA text buffer.
pub struct VgaSurface {
    /// Pointer to the VGA buffer.
    ///
    /// SAFETY: valid for the lifetime of the kernel. The buffer at
    /// 0xB8000 is always mapped in x86 text mode.
    buffer: *mut Buffer,
}

// SAFETY: VgaSurface only accesses the buffer through volatile operations,
// and the kernel runs a single thread of control (no interrupts installed).
unsafe impl Send for VgaSurface {}

impl VgaSurface {
    /// Creates a surface over the standard VGA text buffer.
    pub fn new() -> Self {
        VgaSurface {
            // SAFETY: 0xB8000 is the standard VGA text buffer address on
            // x86 systems, present and mapped on hardware and in QEMU.
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
        }
    }
}

impl Default for VgaSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for VgaSurface {
    fn write_cell(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < HEIGHT && col < WIDTH, "cell index out of bounds");
        // SAFETY: indices are within the fixed buffer dimensions and the
        // pointer was validated at construction. Volatile because the VGA
        // buffer is memory-mapped I/O.
        unsafe {
            ptr::write_volatile(&mut (*self.buffer).cells[row][col], cell);
        }
    }

    fn read_cell(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < HEIGHT && col < WIDTH, "cell index out of bounds");
        // SAFETY: as above; volatile read from memory-mapped I/O.
        unsafe { ptr::read_volatile(&(*self.buffer).cells[row][col]) }
    }
}
