//! x86_64 architecture support.
//!
//! Provides the VGA text buffer surface, keyboard controller port access
//! and serial port output for x86_64 platforms.

pub mod port;
pub mod serial;
pub mod vga;

/// Halts the CPU until the next interrupt.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Terminal state: used after the `halt` command and after panics.
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}
