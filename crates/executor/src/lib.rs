//! # Vela Executor
//!
//! Command dispatch for Vela's administrative statements.
//!
//! This crate turns a resolved [`Command`] into changes to server state:
//! - [`Executor`] - entry point that runs one command in a session
//! - [`PhysicalCommand`] - the operator doing the work, scheduled like any other
//! - [`PhysicalOperator`] / [`OperatorState`] - the shared operator contract
//! - Variable registries for the `SESSION` and `GLOBAL` scopes
//!
//! ## Quick Start
//!
//! ```text
//! use vela_executor::{Command, Executor};
//! use vela_core::{SetScope, SetValue};
//!
//! let executor = Executor::new(Database::open("/etc/vela/vela.toml")?);
//! let mut session = executor.open_session();
//!
//! executor.execute(&mut session, Command::Set {
//!     scope: SetScope::Session,
//!     name: "enable_profile".into(),
//!     value: SetValue::Bool(true),
//! })?;
//! executor.execute(&mut session, Command::Use { db_name: "sales".into() })?;
//! executor.execute(&mut session, Command::Export {
//!     file_no: 1,
//!     file_name: "/tmp/use.json".into(),
//! })?;
//! ```
//!
//! ## Scopes
//!
//! | Scope | Lives in | Shared |
//! |-------|----------|--------|
//! | `SESSION` | [`vela_engine::Session`] | No |
//! | `GLOBAL` | [`vela_engine::Catalog`] and server counters | Yes |
//! | `CONFIG` | [`vela_engine::Config`] and the live log sink | Yes, persisted |

#![warn(missing_docs)]

mod command;
mod context;
mod error;
mod executor;
mod operator;
mod physical_command;
mod variables;

// Handler modules
pub mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::Command;
pub use context::QueryContext;
pub use error::Error;
pub use executor::Executor;
pub use handlers::export::EXPORT_BUFFER_SIZE;
pub use handlers::set::{read_config_parameter, read_global_variable, read_session_variable};
pub use operator::{CompletionGuard, OperatorState, OperatorStatus, PhysicalOperator};
pub use physical_command::PhysicalCommand;
pub use variables::{
    global_variable, session_variable, Access, GlobalVariable, SessionVariable, VariableDef,
    GLOBAL_VARIABLES, SESSION_VARIABLES,
};

pub use vela_core::{LogLevel, SetScope, SetValue, SetVarType, VALID_LOG_LEVELS};
pub use vela_engine::{Database, Session};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
