//! Bridge from the `log` crate to the process-wide logger

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::global;

struct GlobalBridge;

static BRIDGE: GlobalBridge = GlobalBridge;

impl Log for GlobalBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        global::with_logger(|logger| logger.enabled(metadata))
    }

    fn log(&self, record: &Record<'_>) {
        global::with_logger(|logger| logger.log(record));
    }

    fn flush(&self) {
        global::with_logger(|logger| logger.flush());
    }
}

/// Route `log` records through the process-wide logger.
///
/// Fails if another `log` backend is already installed.
pub fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&BRIDGE)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
