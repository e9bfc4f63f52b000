//! Vela - administrative command execution for the Vela query engine
//!
//! Vela runs the statements that change server state rather than table data:
//! switching schemas, setting session, global and config variables, and
//! exporting query profiles.
//!
//! # Quick Start
//!
//! ```ignore
//! use vela::{Command, Database, Executor, SetScope, SetValue};
//!
//! let executor = Executor::new(Database::ephemeral());
//! let mut session = executor.open_session();
//!
//! executor.execute(&mut session, Command::Set {
//!     scope: SetScope::Config,
//!     name: "log_level".into(),
//!     value: SetValue::from("debug"),
//! })?;
//! ```
//!
//! # Architecture
//!
//! All commands go through the [`Executor`], which drives a
//! [`PhysicalCommand`] operator against the session and the shared
//! [`Database`]. Storage and engine internals are not exposed beyond what the
//! executor re-exports.

// Re-export the public API from vela-executor
pub use vela_executor::*;
