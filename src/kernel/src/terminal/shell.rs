//! Command shell loop.
//!
//! Composes the console and keyboard drivers into a read-line-then-dispatch
//! cycle: print the prompt, collect a line with editing, match it against
//! the command table, repeat. The only exit is the `halt` command.

use super::commands::{Command, Flow};
use crate::console::{Console, BACKSPACE};
use crate::keyboard::Keyboard;
use basickernel_hal::{DisplaySurface, PortIo};

/// Shell prompt string.
pub const PROMPT: &str = "basicKernel> ";

/// Input line buffer capacity.
const LINE_CAPACITY: usize = 256;

/// Command shell owning the input line buffer.
pub struct Shell {
    line: [u8; LINE_CAPACITY],
    len: usize,
    halted: bool,
}

impl Shell {
    /// Creates a shell with an empty line buffer.
    pub fn new() -> Self {
        Shell {
            line: [0; LINE_CAPACITY],
            len: 0,
            halted: false,
        }
    }

    /// Collects one line of input, echoing accepted characters.
    ///
    /// Newline or carriage return terminates the line (a newline is
    /// echoed); backspace removes the last character when the buffer is
    /// non-empty and echoes a backspace; printable characters (space
    /// through `~`) are appended while capacity remains. Everything else
    /// is ignored. Returns only on line termination; there is no timeout
    /// and no cancellation.
    pub fn read_line<S, P>(&mut self, console: &mut Console<S>, keyboard: &mut Keyboard<P>)
    where
        S: DisplaySurface,
        P: PortIo,
    {
        self.len = 0;
        loop {
            let c = match keyboard.read_char() {
                Some(c) => c,
                None => continue,
            };
            match c {
                b'\n' | b'\r' => {
                    console.put_char(b'\n');
                    return;
                }
                BACKSPACE => {
                    if self.len > 0 {
                        self.len -= 1;
                        console.put_char(BACKSPACE);
                    }
                }
                b' '..=b'~' => {
                    if self.len < LINE_CAPACITY - 1 {
                        self.line[self.len] = c;
                        self.len += 1;
                        console.put_char(c);
                    }
                }
                _ => {}
            }
        }
    }

    /// The current contents of the line buffer.
    pub fn line(&self) -> &str {
        // The buffer only ever holds bytes in b' '..=b'~'.
        core::str::from_utf8(&self.line[..self.len]).unwrap_or("")
    }

    /// Matches one line against the command table and runs the action.
    ///
    /// Once the shell has halted, dispatch does nothing and keeps
    /// reporting [`Flow::Halt`].
    pub fn dispatch<S: DisplaySurface>(&mut self, line: &str, console: &mut Console<S>) -> Flow {
        if self.halted {
            return Flow::Halt;
        }
        let flow = match Command::parse(line) {
            Some(command) => command.execute(console),
            None => Flow::Continue,
        };
        if flow == Flow::Halt {
            self.halted = true;
        }
        flow
    }

    /// Whether the `halt` command has been dispatched.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Runs the prompt / read / dispatch loop.
    ///
    /// Returns only when the `halt` command runs; the caller is expected
    /// to stop the CPU permanently at that point.
    pub fn run<S, P>(&mut self, console: &mut Console<S>, keyboard: &mut Keyboard<P>)
    where
        S: DisplaySurface,
        P: PortIo,
    {
        loop {
            console.write_str(PROMPT);
            self.read_line(console, keyboard);

            let mut buf = [0u8; LINE_CAPACITY];
            let len = self.len;
            buf[..len].copy_from_slice(&self.line[..len]);
            let line = core::str::from_utf8(&buf[..len]).unwrap_or("");

            if self.dispatch(line, console) == Flow::Halt {
                return;
            }
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
