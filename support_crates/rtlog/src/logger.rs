//! A logging implementation which writes records to the process's standard error stream
use std::fmt::{self, Write};
use std::io::Write as IoWrite;

use log::{Level, Log, Metadata, Record, SetLoggerError};

pub struct RuntimeLogger {
    pub initial_log_level: Level,
}

impl RuntimeLogger {
    pub const fn new(max_log_level: Level) -> RuntimeLogger {
        RuntimeLogger {
            initial_log_level: max_log_level,
        }
    }

    pub fn install(&'static self) -> Result<(), SetLoggerError> {
        log::set_logger(self).map(|_| log::set_max_level(self.initial_log_level.to_level_filter()))
    }

    pub fn update_log_level(&'static self, level: Level) {
        log::set_max_level(level.to_level_filter());
    }
}

/// Reads a log level name from the given environment variable.
///
/// Returns `None` when the variable is unset or does not name a [`Level`].
pub fn level_from_env(var: &str) -> Option<Level> {
    std::env::var(var).ok()?.parse().ok()
}

/// Dummy struct that makes converting [`fmt::Arguments`] easier to convert to strings
/// by offloading that to the [`Write`] trait.
struct StderrWriter {}

impl Write for StderrWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        std::io::stderr()
            .write_all(s.as_bytes())
            .map_err(|_| fmt::Error)
    }
}

impl Log for RuntimeLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // a failed stderr write must never abort the host process
            let _ = StderrWriter {}.write_fmt(format_args!(
                "{} - {}: {}\n",
                record.level(),
                record.target(),
                record.args(),
            ));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_level_from_env_parses_level_names() {
        std::env::set_var("RTLOG_TEST_LEVEL", "debug");
        assert_eq!(level_from_env("RTLOG_TEST_LEVEL"), Some(Level::Debug));

        std::env::set_var("RTLOG_TEST_LEVEL", "TRACE");
        assert_eq!(level_from_env("RTLOG_TEST_LEVEL"), Some(Level::Trace));
    }

    #[test]
    fn test_level_from_env_rejects_garbage() {
        std::env::set_var("RTLOG_TEST_GARBAGE", "loud");
        assert_eq!(level_from_env("RTLOG_TEST_GARBAGE"), None);
        assert_eq!(level_from_env("RTLOG_TEST_UNSET"), None);
    }
}
