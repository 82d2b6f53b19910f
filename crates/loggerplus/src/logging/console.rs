//! Colorized console logger

use std::time::SystemTime;

use colored::Colorize;

use super::traits::{LogLevel, Logger};

/// A logger that writes formatted lines to the console
///
/// Info goes to stdout, every other level to stderr. The level tag is
/// colorized; the `colored` crate suppresses escape codes on its own when
/// the stream is not a terminal or `NO_COLOR` is set.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: Option<String>,
    color: bool,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger with colorized output
    pub fn new() -> Self {
        Self {
            prefix: None,
            color: true,
        }
    }

    /// Tag every line with a fixed prefix, e.g. a subsystem name
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            color: true,
        }
    }

    /// Create a console logger that never emits escape codes
    pub fn plain() -> Self {
        Self {
            prefix: None,
            color: false,
        }
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let tag = if self.color {
            paint(level)
        } else {
            level.to_string()
        };
        match &self.prefix {
            Some(prefix) => format!("[{}] [{}] [{}] {}", timestamp(), tag, prefix, message),
            None => format!("[{}] [{}] {}", timestamp(), tag, message),
        }
    }

    fn write(&self, level: LogLevel, message: &str) {
        let line = self.format_line(level, message);
        if level == LogLevel::Info {
            println!("{line}");
        } else {
            eprintln!("{line}");
        }
    }
}

fn paint(level: LogLevel) -> String {
    let name = level.to_string();
    match level {
        LogLevel::Debug => name.blue().to_string(),
        LogLevel::Info => name.green().to_string(),
        LogLevel::Warning => name.yellow().to_string(),
        LogLevel::Error => name.red().to_string(),
        LogLevel::Critical => name.red().bold().to_string(),
    }
}

/// Wall-clock time of day as HH:MM:SS.mmm, UTC
fn timestamp() -> String {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs();
            let millis = d.subsec_millis();
            let hours = (secs % 86400) / 3600;
            let mins = (secs % 3600) / 60;
            let secs = secs % 60;
            format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
        })
        .unwrap_or_else(|_| "??:??:??.???".to_string())
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        self.write(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.write(LogLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.write(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.write(LogLevel::Error, message);
    }

    fn critical(&self, message: &str) {
        self.write(LogLevel::Critical, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_plain() {
        let logger = ConsoleLogger::plain();
        let line = logger.format_line(LogLevel::Warning, "disk space low");
        assert!(line.contains("[WARNING]"));
        assert!(line.ends_with("disk space low"));
        // No escape codes in plain mode
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_format_line_with_prefix() {
        let logger = ConsoleLogger {
            prefix: Some("worker".to_string()),
            color: false,
        };
        let line = logger.format_line(LogLevel::Info, "started");
        assert!(line.contains("[INFO]"));
        assert!(line.contains("[worker]"));
        assert!(line.ends_with("started"));
    }

    #[test]
    fn test_console_logger_logs() {
        // This test just verifies the logger doesn't panic
        let logger = ConsoleLogger::new();
        logger.debug("debug message");
        logger.info("info message");
        logger.warning("warning message");
        logger.error("error message");
        logger.critical("critical message");
    }
}
