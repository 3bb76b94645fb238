//! Terminal subsystem.
//!
//! - `shell`: the prompt / read-line / dispatch loop
//! - `commands`: the fixed command table

pub mod commands;
pub mod shell;

pub use commands::{Command, Flow};
pub use shell::Shell;
