//! Core types for Vela
//!
//! This crate defines the leaf value types shared by every layer:
//! - SetScope: Namespace of a settable variable (session/global/config)
//! - SetVarType: Declared type of a settable variable
//! - SetValue: Typed value of a `SET` statement
//! - LogLevel: The six log severity literals

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod log_level;
pub mod types;
pub mod value;

pub use error::ParseLogLevelError;
pub use log_level::{LogLevel, VALID_LOG_LEVELS};
pub use types::SetScope;
pub use value::{SetValue, SetVarType};
