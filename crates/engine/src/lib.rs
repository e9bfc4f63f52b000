//! Server state for Vela
//!
//! This crate owns the live state the command layer mutates:
//! - Database: process-wide catalog, configuration, log sink and counters
//! - Session: per-connection schema, profiling toggle and profile history
//! - Catalog: global profile-history capacity
//! - Config: `vela.toml` options, persisted on change
//! - LogSink: the live log threshold behind a reloadable subscriber
//! - QueryProfiler / ProfileRecord / ProfileHistory: query profiling
//!
//! The engine knows nothing about commands; it only exposes mutators that are
//! safe to call from any session.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod database;
pub mod error;
pub mod logging;
pub mod profiler;
pub mod session;

pub use catalog::Catalog;
pub use database::{
    Config, ConfigOptions, Database, GlobalOptionIndex, CONFIG_FILE_NAME,
    DEFAULT_PROFILE_HISTORY_CAPACITY,
};
pub use error::{EngineError, EngineResult};
pub use logging::{init_logging, LogSink};
pub use profiler::{PhaseTiming, ProfileHistory, ProfileRecord, QueryProfiler};
pub use session::{Session, DEFAULT_DATABASE};
