//! Logging abstractions and the RobustLogger convenience wrapper

mod traits;
mod noop;
mod console;
mod robust;

pub use traits::{BoxedLogger, LogLevel, Logger, LoggerExt, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use robust::{InitError, RobustLogger};

// Re-export the fallback logging functions for convenience
pub use robust::{critical, debug, error, exception, info, warning};
