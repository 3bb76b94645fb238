//! Built-in shell commands.
//!
//! The command table is fixed for the life of the system and matched in a
//! set priority order: exact `help`, exact `clear`, prefix `echo `, exact
//! `halt`, exact `version`, then the unknown-command fallback. Matching is
//! case-sensitive and trailing whitespace is not trimmed, so `help ` with
//! a trailing space falls through to the fallback.

use crate::console::Console;
use crate::format::{format_print, Arg};
use basickernel_hal::DisplaySurface;

/// Fixed version string reported by `version` and the boot banner.
pub const VERSION: &str = "BasicKernel v0.1";

/// What the shell loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep prompting for input.
    Continue,
    /// Stop the machine permanently.
    Halt,
}

/// Shell command types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Display the help text.
    Help,
    /// Clear the screen.
    Clear,
    /// Echo text back to the console.
    Echo(&'a str),
    /// Halt the system permanently.
    Halt,
    /// Display the kernel version.
    Version,
    /// Anything that matched no table entry.
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Parses one input line.
    ///
    /// Leading spaces are stripped; a line that is empty or all spaces
    /// parses to `None` and dispatching it is a silent no-op.
    pub fn parse(line: &'a str) -> Option<Command<'a>> {
        let line = line.trim_start_matches(' ');
        if line.is_empty() {
            return None;
        }
        Some(if line == "help" {
            Command::Help
        } else if line == "clear" {
            Command::Clear
        } else if let Some(text) = line.strip_prefix("echo ") {
            Command::Echo(text)
        } else if line == "halt" {
            Command::Halt
        } else if line == "version" {
            Command::Version
        } else {
            Command::Unknown(line)
        })
    }

    /// Executes the command, writing any output to the console.
    pub fn execute<S: DisplaySurface>(self, console: &mut Console<S>) -> Flow {
        match self {
            Command::Help => {
                console.write_str("Available commands:\n");
                console.write_str("  help    - Display this help message\n");
                console.write_str("  clear   - Clear the screen\n");
                console.write_str("  echo    - Echo text to the screen\n");
                console.write_str("  halt    - Halt the system\n");
                console.write_str("  version - Display kernel version\n");
                Flow::Continue
            }
            Command::Clear => {
                console.clear();
                Flow::Continue
            }
            Command::Echo(text) => {
                format_print(console, "%s\n", &[Arg::Str(text)]);
                Flow::Continue
            }
            Command::Halt => {
                console.write_str("System halted. You may now turn off your computer.\n");
                Flow::Halt
            }
            Command::Version => {
                format_print(console, "%s\n", &[Arg::Str(VERSION)]);
                Flow::Continue
            }
            Command::Unknown(line) => {
                format_print(console, "Unknown command: %s\n", &[Arg::Str(line)]);
                Flow::Continue
            }
        }
    }
}
