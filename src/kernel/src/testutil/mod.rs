//! Test doubles for the hardware capabilities.
//!
//! Hosted unit tests inject these in place of the VGA buffer and the
//! keyboard controller ports, keeping the drivers deterministic without
//! real hardware timing.

use crate::console::{HEIGHT, WIDTH};
use crate::keyboard::{DATA_PORT, STATUS_PORT};
use basickernel_hal::{Cell, DisplaySurface, PortIo};
use std::collections::VecDeque;

/// In-memory display surface with the text mode dimensions.
pub struct FakeSurface {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl FakeSurface {
    /// Creates a surface with every cell zeroed.
    pub fn new() -> Self {
        FakeSurface {
            cells: [[Cell::new(0, 0); WIDTH]; HEIGHT],
        }
    }

    /// Returns the text content of one row, trailing blanks trimmed.
    pub fn row_text(&self, row: usize) -> String {
        let text: String = self.cells[row]
            .iter()
            .map(|cell| if cell.glyph == 0 { ' ' } else { cell.glyph as char })
            .collect();
        text.trim_end().to_string()
    }

    /// Copies out the whole grid for before/after comparisons.
    pub fn snapshot(&self) -> [[Cell; WIDTH]; HEIGHT] {
        self.cells
    }
}

impl DisplaySurface for FakeSurface {
    fn write_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    fn read_cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }
}

/// Scripted keyboard controller.
///
/// Serves queued scancodes through the data port and reports readiness on
/// the status port. Reading the data port with nothing pending is a
/// driver bug, so the fake panics on it.
pub struct ScriptedPorts {
    scancodes: VecDeque<u8>,
    stall: usize,
}

impl ScriptedPorts {
    /// Queues the given scancodes for delivery.
    pub fn new(scancodes: &[u8]) -> Self {
        ScriptedPorts {
            scancodes: scancodes.iter().copied().collect(),
            stall: 0,
        }
    }

    /// Makes the next `reads` status polls report not-ready, so tests can
    /// exercise the spin-wait.
    pub fn with_stall(mut self, reads: usize) -> Self {
        self.stall = reads;
        self
    }
}

impl PortIo for ScriptedPorts {
    fn read_byte(&mut self, port: u16) -> u8 {
        match port {
            STATUS_PORT => {
                if self.stall > 0 {
                    self.stall -= 1;
                    0
                } else if self.scancodes.is_empty() {
                    0
                } else {
                    1
                }
            }
            DATA_PORT => self
                .scancodes
                .pop_front()
                .expect("data port read with no byte pending"),
            other => panic!("unexpected port read: {other:#x}"),
        }
    }
}
