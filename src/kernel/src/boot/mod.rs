//! Boot logging with colored status indicators.

pub mod banner;

use crate::console::{Color, Console};
use basickernel_hal::DisplaySurface;

/// Boot status indicators.
#[derive(Debug, Clone, Copy)]
pub enum Status {
    /// Success - `[ OK ]` in green
    Ok,
    /// Failure - `[FAIL]` in red
    Fail,
    /// Warning - `[WARN]` in yellow
    Warn,
    /// Informational - `[INFO]` in cyan
    Info,
}

/// Logs a boot stage with status.
///
/// Format: `[ OK ] Message text`
pub fn log<S: DisplaySurface>(console: &mut Console<S>, status: Status, message: &str) {
    let (text, color) = match status {
        Status::Ok => ("[ OK ]", Color::LightGreen),
        Status::Fail => ("[FAIL]", Color::LightRed),
        Status::Warn => ("[WARN]", Color::Yellow),
        Status::Info => ("[INFO]", Color::LightCyan),
    };
    console.set_color(color, Color::Black);
    console.write_str(text);
    console.set_color(Color::White, Color::Black);
    console.write_str(" ");
    console.write_str(message);
    console.put_char(b'\n');
}
