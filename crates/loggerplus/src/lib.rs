//! LoggerPlus
//!
//! Convenience wrapper around the [`log`] facade: colorized console output,
//! logging that works before any logger was constructed or installed, and
//! scoped attribute-access spoofing utilities for the crate's own test
//! harness.
//!
//! ```rust,ignore
//! use loggerplus::{logging, LogLevel, Logger, RobustLogger};
//!
//! let logger = RobustLogger::new();
//! logger.info("constructed logger");
//!
//! // No instance anywhere: the global fallback is built on first use.
//! logging::warning("nobody constructed a logger");
//!
//! // Route the facade's macros through the same logger.
//! RobustLogger::new().with_min_level(LogLevel::Debug).init();
//! log::info!("through the facade");
//! ```

pub mod logging;
pub mod runtime;
pub mod spoof;

// Re-export commonly used types
pub use logging::{
    BoxedLogger, ConsoleLogger, InitError, LogLevel, Logger, LoggerExt, NoOpLogger, RobustLogger,
    SharedLogger,
};

pub use runtime::{debugger_attached, is_debug_mode, is_packaged_runtime};

pub use spoof::{
    AccessPolicy, AttrError, AttrMap, AttrResult, DefaultAccess, DenyAccess, Instance,
    SpoofObjectAccess, SpoofTypeAccess, TypeObject,
};
