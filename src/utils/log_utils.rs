//! Verbosity-gated diagnostics
//!
//! Diagnostics go to stderr so the report on stdout stays the same no matter
//! how many `-v` flags are given.

/// Log levels for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// One verbose flag (-v)
    Info = 1,
    /// Two verbose flags (-v -v)
    Debug = 2,
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Debug => "dbg",
        }
    }
}

/// Logger bound to a fixed verbosity
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    verbosity: u8,
}

impl Logger {
    #[must_use]
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    pub fn info(&self, msg: &str) {
        log(msg, self.verbosity, LogLevel::Info);
    }

    pub fn debug(&self, msg: &str) {
        log(msg, self.verbosity, LogLevel::Debug);
    }
}

#[must_use]
pub fn enabled(verbosity: u8, level: LogLevel) -> bool {
    verbosity >= level as u8
}

#[must_use]
pub fn format_line(msg: &str, level: LogLevel) -> String {
    format!("{}: {}", level.prefix(), msg)
}

/// Log a message if the verbosity level is at least the specified level
///
/// # Arguments
///
/// * `msg` - The message to log
/// * `verbosity` - The current verbosity level (0 = quiet, 1 = info, 2+ = debug)
/// * `level` - The minimum level required for this message to be logged
pub fn log(msg: &str, verbosity: u8, level: LogLevel) {
    if enabled(verbosity, level) {
        eprintln!("{}", format_line(msg, level));
    }
}

/// Log at info level (verbose >= 1)
pub fn info(msg: &str, verbosity: u8) {
    log(msg, verbosity, LogLevel::Info)
}

/// Log at debug level (verbose >= 2)
pub fn debug(msg: &str, verbosity: u8) {
    log(msg, verbosity, LogLevel::Debug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_gate_on_verbosity() {
        assert!(!enabled(0, LogLevel::Info));
        assert!(enabled(1, LogLevel::Info));
        assert!(!enabled(1, LogLevel::Debug));
    }

    #[test]
    fn lines_are_prefixed() {
        assert_eq!(format_line("hello", LogLevel::Info), "info: hello");
        assert_eq!(format_line("hello", LogLevel::Debug), "dbg: hello");
    }
}
