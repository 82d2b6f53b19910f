//! Level-filtering logger with a global fallback
//!
//! `RobustLogger` is the crate's front door: a console logger by default,
//! filtered by a minimum level derived from the environment. The free
//! functions in this module log through a process-wide instance that is
//! constructed lazily, so calling them before any setup works and behaves
//! exactly like logging on a freshly constructed instance.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;

use crate::runtime::is_debug_mode;

use super::console::ConsoleLogger;
use super::traits::{LogLevel, Logger, SharedLogger};

/// Environment variable naming an explicit minimum level
const LOG_LEVEL_ENV: &str = "LOGGERPLUS_LOG_LEVEL";

/// Errors that can occur while installing the logger
#[derive(Debug, Error)]
pub enum InitError {
    /// The log facade already has a global logger
    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Process-wide instance backing the free functions
static GLOBAL: Lazy<RwLock<Arc<RobustLogger>>> =
    Lazy::new(|| RwLock::new(Arc::new(RobustLogger::new())));

/// Convenience wrapper over a [`Logger`] sink with level filtering
///
/// The default sink is a [`ConsoleLogger`]. The minimum level comes from
/// `LOGGERPLUS_LOG_LEVEL` when set to a recognized name, otherwise Debug
/// when [`is_debug_mode`] reports true and Info everywhere else.
#[derive(Clone)]
pub struct RobustLogger {
    sink: SharedLogger,
    min_level: LogLevel,
}

impl Default for RobustLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl RobustLogger {
    /// Create a logger with a console sink and environment-derived level
    pub fn new() -> Self {
        let min_level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|v| LogLevel::parse(&v))
            .unwrap_or_else(|| {
                if is_debug_mode() {
                    LogLevel::Debug
                } else {
                    LogLevel::Info
                }
            });
        Self {
            sink: Arc::new(ConsoleLogger::new()),
            min_level,
        }
    }

    /// Replace the sink
    pub fn with_sink(mut self, sink: SharedLogger) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the minimum level
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Use a console sink tagged with a fixed prefix
    pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
        self.with_sink(Arc::new(ConsoleLogger::with_prefix(prefix)))
    }

    /// The process-wide instance backing the free functions
    ///
    /// Constructed with defaults on first use, so logging without ever
    /// constructing or installing anything still produces output.
    pub fn global() -> Arc<RobustLogger> {
        GLOBAL.read().clone()
    }

    /// Replace the process-wide instance
    pub fn install_global(logger: RobustLogger) {
        *GLOBAL.write() = Arc::new(logger);
    }

    /// Whether a message at `level` would be emitted
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn dispatch(&self, level: LogLevel, message: &str) {
        if self.enabled(level) {
            self.sink.log(level, message);
        }
    }

    /// Log a caught error at Error level, including its source chain
    pub fn exception(&self, message: &str, error: &(dyn std::error::Error + 'static)) {
        let mut line = format!("{message}: {error}");
        let mut source = error.source();
        while let Some(cause) = source {
            line.push_str("\n  caused by: ");
            line.push_str(&cause.to_string());
            source = cause.source();
        }
        self.dispatch(LogLevel::Error, &line);
    }

    /// Install this logger as the `log` facade's global logger
    ///
    /// After this, the facade's `log::info!`-style macros route through
    /// this logger. Fails if the facade already has a logger.
    pub fn try_init(self) -> Result<(), InitError> {
        let max = match self.min_level {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error | LogLevel::Critical => log::LevelFilter::Error,
        };
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max);
        Ok(())
    }

    /// Like [`RobustLogger::try_init`], but keeps whatever logger is
    /// already installed instead of failing
    pub fn init(self) {
        let _ = self.try_init();
    }
}

impl Logger for RobustLogger {
    fn debug(&self, message: &str) {
        self.dispatch(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.dispatch(LogLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.dispatch(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.dispatch(LogLevel::Error, message);
    }

    fn critical(&self, message: &str) {
        self.dispatch(LogLevel::Critical, message);
    }
}

impl log::Log for RobustLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.enabled(LogLevel::from(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        self.dispatch(record.level().into(), &record.args().to_string());
    }

    fn flush(&self) {}
}

/// Log a debug message through the process-wide instance
pub fn debug(message: &str) {
    RobustLogger::global().debug(message);
}

/// Log an info message through the process-wide instance
pub fn info(message: &str) {
    RobustLogger::global().info(message);
}

/// Log a warning message through the process-wide instance
pub fn warning(message: &str) {
    RobustLogger::global().warning(message);
}

/// Log an error message through the process-wide instance
pub fn error(message: &str) {
    RobustLogger::global().error(message);
}

/// Log a critical message through the process-wide instance
pub fn critical(message: &str) {
    RobustLogger::global().critical(message);
}

/// Log a caught error through the process-wide instance
pub fn exception(message: &str, error: &(dyn std::error::Error + 'static)) {
    RobustLogger::global().exception(message, error);
}
