//! Application initialization.
//!
//! Sets up process-wide facilities before a comparison run starts. At present
//! that is only the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
