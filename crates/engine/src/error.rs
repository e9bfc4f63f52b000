//! Error types for the engine layer

use thiserror::Error;

/// Result type alias for engine operations
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Errors raised by configuration, logging and server state.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Config file could not be read, parsed or written
    #[error("config error: {0}")]
    Config(String),

    /// The live log sink rejected a change, or logging could not start
    #[error("logging error: {0}")]
    Logging(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        EngineError::Config(msg.into())
    }

    /// Create a logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        EngineError::Logging(msg.into())
    }
}
