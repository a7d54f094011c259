//! `log` backend that writes to the serial port.

use crate::serial_println;
use log::{LevelFilter, Log, Metadata, Record};

/// Writes every enabled record as one serial line.
struct SerialLogger;

static LOGGER: SerialLogger = SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            serial_println!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs the serial logger.
///
/// Logs at `Info` and above, or everything with the `verbose-log` feature.
/// A second call leaves the first logger in place.
pub fn init() {
    let level = if cfg!(feature = "verbose-log") {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
