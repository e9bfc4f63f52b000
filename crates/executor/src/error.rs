//! Error types for command execution.
//!
//! All recoverable errors from command execution are represented by the
//! [`Error`] enum. These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Scoped**: An error aborts the current command only; the session and
//!   the server keep running
//!
//! Unrecoverable conditions (a planner or scheduler invariant broken) do not
//! appear here. They are logged at critical severity and panic through
//! [`unrecoverable`].

use serde::{Deserialize, Serialize};
use vela_core::{SetValue, SetVarType};
use vela_engine::EngineError;
use vela_storage::StorageError;

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Type | `DataTypeMismatch` | Value type differs from the variable's declared type |
/// | Validation | `InvalidCommand`, `SetInvalidVarValue` | Unknown name, read-only target, bad literal |
/// | Not Found | `DataNotExist` | Referenced record is absent |
/// | System | `Io`, `Serialization`, `Config`, `Internal` | Infrastructure errors |
///
/// # Example
///
/// ```ignore
/// use vela_executor::{Command, Error};
///
/// match executor.execute(&mut session, cmd) {
///     Ok(()) => { /* handle success */ }
///     Err(Error::DataTypeMismatch { expected, actual }) => {
///         println!("expected {}, got {}", expected, actual);
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Type Errors ====================
    /// Value type does not match the variable's declared type
    #[error("data type mismatch: expected {expected}, got {actual}")]
    DataTypeMismatch {
        /// Declared type
        expected: String,
        /// Type of the supplied value
        actual: String,
    },

    // ==================== Validation Errors ====================
    /// Unknown variable, read-only variable or unusable command
    #[error("invalid command: {reason}")]
    InvalidCommand {
        /// What was wrong
        reason: String,
    },

    /// Value of the right type but outside the accepted set
    #[error("invalid value for {name}, valid values: {valid_values}")]
    SetInvalidVarValue {
        /// Variable or parameter name
        name: String,
        /// Accepted values
        valid_values: String,
    },

    // ==================== Not Found ====================
    /// Requested data does not exist
    #[error("data does not exist: {reason}")]
    DataNotExist {
        /// What was missing
        reason: String,
    },

    // ==================== System Errors ====================
    /// I/O error
    #[error("I/O error: {reason}")]
    Io {
        /// Underlying I/O error
        reason: String,
    },

    /// Serialization error
    #[error("serialization error: {reason}")]
    Serialization {
        /// Underlying serializer error
        reason: String,
    },

    /// Configuration could not be persisted or applied
    #[error("config error: {reason}")]
    Config {
        /// Underlying config error
        reason: String,
    },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal {
        /// Description of the failure
        reason: String,
    },
}

impl Error {
    /// Type mismatch between a variable's declared type and a value.
    pub fn type_mismatch(expected: SetVarType, actual: &SetValue) -> Self {
        Error::DataTypeMismatch {
            expected: expected.name().to_string(),
            actual: actual.type_name().to_string(),
        }
    }

    /// Invalid command with a reason.
    pub fn invalid_command(reason: impl Into<String>) -> Self {
        Error::InvalidCommand {
            reason: reason.into(),
        }
    }
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Error::Io {
            reason: e.to_string(),
        }
    }
}

impl From<EngineError> for Error {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Config(reason) => Error::Config { reason },
            EngineError::Io(io) => Error::Io {
                reason: io.to_string(),
            },
            EngineError::Logging(reason) => Error::Internal { reason },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization {
            reason: e.to_string(),
        }
    }
}

/// Log `message` at critical severity and abort the current execution unit.
pub(crate) fn unrecoverable(message: impl Into<String>) -> ! {
    let message = message.into();
    vela_engine::logging::critical(&message);
    panic!("{}", message)
}
