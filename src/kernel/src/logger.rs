//! `log` facade backed by the serial port.
//!
//! Boot progress on the VGA console goes through [`crate::boot::log`];
//! this logger carries the same information out over COM1 where QEMU's
//! `-serial stdio` can capture it.

use log::{LevelFilter, Metadata, Record};

struct SerialLogger;

static LOGGER: SerialLogger = SerialLogger;

impl log::Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            crate::serial_println!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs the serial logger at `Info` level.
///
/// Idempotent: a second call leaves the existing logger in place.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}
