//! Boot banner.

use crate::console::Console;
use crate::format::{format_print, Arg};
use crate::terminal::commands::VERSION;
use basickernel_hal::DisplaySurface;

/// Prints the welcome banner shown right after the screen is cleared.
pub fn print_banner<S: DisplaySurface>(console: &mut Console<S>) {
    format_print(console, "%s\n", &[Arg::Str(VERSION)]);
    console.write_str("A simple hobbyist operating system\n");
    console.write_str("-------------------------------------\n\n");
}
