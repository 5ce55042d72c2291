//! Application configuration and constants.
//!
//! This module provides:
//! - Normalization and extraction constants (markers, sentinels, placeholders)
//! - Default output file names
//! - Library configuration and log option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
