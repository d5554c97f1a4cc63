//! Console Logger
//!
//! `log` facade backend for WASM frontends. Routes records to the
//! matching browser console method (error/warn/info/debug).

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Logger writing through `web_sys::console`
pub struct ConsoleLogger;

/// Install the console logger with the given max level.
///
/// Call once at startup, before the first log macro fires.
pub fn init(max_level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(max_level);
    Ok(())
}

/// Render a record as a single console line
fn format_record(record: &Record) -> String {
    format!("[{}] {}", record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_includes_target_and_message() {
        assert_eq!(
            format_record(
                &Record::builder()
                    .args(format_args!("carousel at {}", 3))
                    .level(Level::Warn)
                    .target("folio_ui::showcase")
                    .build()
            ),
            "[folio_ui::showcase] carousel at 3"
        );
    }
}
