//! CLI verbose/debug logging
//!
//! Provides configurable stderr logging for the nimbus CLI with:
//! - Verbosity levels (Normal, Verbose, Debug)
//! - Environment variable support (NIMBUS_VERBOSE, NIMBUS_DEBUG)
//! - HTTP request/response lines at debug level

mod level;

pub use level::LogLevel;

use std::sync::OnceLock;

/// Logger for CLI verbose/debug output
///
/// All output goes to stderr so it never mixes with command results on
/// stdout.
pub struct Logger {
    level: LogLevel,
    color: bool,
}

impl Logger {
    /// Create a new logger at the given level
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            color: std::env::var("NO_COLOR").is_err(),
        }
    }

    /// Check if verbose output is enabled
    pub fn is_verbose(&self) -> bool {
        self.level.is_verbose()
    }

    /// Check if debug output is enabled
    pub fn is_debug(&self) -> bool {
        self.level.is_debug()
    }

    /// Log a verbose message
    pub fn verbose(&self, message: impl AsRef<str>) {
        if !self.level.is_verbose() {
            return;
        }

        if self.color {
            eprintln!("\x1b[2m[verbose]\x1b[0m {}", message.as_ref());
        } else {
            eprintln!("[verbose] {}", message.as_ref());
        }
    }

    /// Log an HTTP request at debug level
    pub fn debug_request(&self, method: &str, url: &str) {
        if !self.level.is_debug() {
            return;
        }

        if self.color {
            eprintln!("\x1b[2m[debug]\x1b[0m >>> {} {}", method, url);
        } else {
            eprintln!("[debug] >>> {} {}", method, url);
        }
    }

    /// Log an HTTP response at debug level
    pub fn debug_response(&self, status: u16, timing_ms: u128) {
        if !self.level.is_debug() {
            return;
        }

        if self.color {
            eprintln!("\x1b[2m[debug]\x1b[0m <<< {} ({}ms)", status, timing_ms);
        } else {
            eprintln!("[debug] <<< {} ({}ms)", status, timing_ms);
        }
    }
}

/// Global logger instance for use throughout the CLI
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Initialize the global logger
///
/// Called once at CLI startup with the parsed flags. Later calls are
/// ignored.
pub fn init_global_logger(level: LogLevel) {
    let _ = GLOBAL_LOGGER.set(Logger::new(level));
}

/// Get a reference to the global logger
///
/// Falls back to a silent logger if `init_global_logger` was never called.
pub fn global_logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(|| Logger::new(LogLevel::Normal))
}
