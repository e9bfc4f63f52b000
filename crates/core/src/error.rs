//! Error types for core value parsing
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

use crate::log_level::VALID_LOG_LEVELS;

/// A string that is not one of the six log level literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid log level '{input}', expected one of: {}", VALID_LOG_LEVELS)]
pub struct ParseLogLevelError {
    /// The rejected input
    pub input: String,
}
