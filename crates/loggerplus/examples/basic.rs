//! Walk through the logger surface: instance methods, the global fallback,
//! error chains, and the log facade.

use loggerplus::{logging, LogLevel, Logger, RobustLogger};

fn main() {
    let logger = RobustLogger::new().with_min_level(LogLevel::Debug);
    logger.debug("This is a debug message");
    logger.info("This is an info message.");
    logger.warning("This is a warning message.");
    logger.error("This is an error message.");
    logger.critical("This is a critical message.");

    // Nothing constructed here: the free functions build a default
    // instance on first use instead of failing.
    logging::debug("Logging without ever constructing a logger.");

    let failure = std::io::Error::other("test caught error");
    logger.exception("Message for a caught error", &failure);

    // Route the facade's macros through the same logger.
    RobustLogger::new().with_min_level(LogLevel::Debug).init();
    log::info!("This message arrives through the log facade.");
}
