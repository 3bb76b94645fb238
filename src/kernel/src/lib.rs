//! basicKernel
//!
//! A minimal bare-metal console environment: a text console driver over
//! the VGA buffer, a polling PS/2 keyboard driver, and a command shell
//! that ties the two together.
//!
//! # Architecture
//!
//! - `console`: cursor, color and scroll management over the 80x25 grid
//! - `keyboard`: scancode translation with shift state, polled input
//! - `terminal`: the prompt / read-line / dispatch loop and command table
//! - `format`: the `%`-escape formatter used for console output
//! - `arch`: platform-specific surfaces (VGA buffer, port I/O, serial)
//! - `boot`: banner and boot status lines
//!
//! Hardware access goes through the capability traits in
//! `basickernel-hal`, so every driver runs against in-memory fakes in the
//! hosted unit tests.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod arch;
pub mod boot;
pub mod console;
pub mod format;
pub mod keyboard;
#[cfg(target_arch = "x86_64")]
pub mod logger;
pub mod terminal;

#[cfg(test)]
pub mod testutil;

/// Initializes core kernel subsystems.
///
/// Brings up the serial port and the serial-backed logger; called early
/// in the boot process, before the console is touched.
pub fn init() {
    #[cfg(target_arch = "x86_64")]
    {
        arch::x86_64::serial::init();
        logger::init();
    }
}
