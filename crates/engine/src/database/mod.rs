//! Database struct and open logic
//!
//! [`Database`] is the process-wide server state every session shares:
//! - the global catalog
//! - the configuration object
//! - the live log sink
//! - server-wide counters
//!
//! Sessions are opened from it with [`Database::new_session`].

pub mod config;

pub use config::{
    Config, ConfigOptions, GlobalOptionIndex, CONFIG_FILE_NAME, DEFAULT_PROFILE_HISTORY_CAPACITY,
};

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::info;
use vela_core::LogLevel;

use crate::catalog::Catalog;
use crate::error::EngineResult;
use crate::logging::{init_logging, LogSink};
use crate::session::Session;

/// Process-wide server state.
///
/// # Thread Safety
///
/// `Database` is `Send + Sync`; share it as `Arc<Database>`. Every mutator
/// synchronises internally, so callers never add their own locking.
///
/// # Example
///
/// ```text
/// use vela_engine::Database;
///
/// let db = Database::ephemeral();
/// let mut session = db.new_session();
/// session.set_profile(true);
/// ```
#[derive(Debug)]
pub struct Database {
    catalog: Catalog,
    config: Config,
    log_sink: LogSink,
    /// Serializes log-level changes across the config and the sink
    log_level_commit: Mutex<()>,
    started_at: DateTime<Utc>,
    query_count: AtomicU64,
    session_count: AtomicU64,
}

impl Database {
    /// Open a server from the config file at `path`, installing the global
    /// log subscriber. A default config file is written if none exists.
    pub fn open(path: impl AsRef<Path>) -> EngineResult<Arc<Self>> {
        let config = Config::open(path)?;
        let log_sink = init_logging(&config.options())?;
        let db = Self::open_with_config(config, log_sink);
        info!(
            target: "vela::database",
            config = ?db.config.path(),
            log_level = %db.log_sink.level(),
            "Database opened"
        );
        Ok(db)
    }

    /// Build a server from an already loaded config and sink.
    pub fn open_with_config(config: Config, log_sink: LogSink) -> Arc<Self> {
        let capacity = config.options().profile_history_capacity;
        Arc::new(Self {
            catalog: Catalog::new(capacity),
            config,
            log_sink,
            log_level_commit: Mutex::new(()),
            started_at: Utc::now(),
            query_count: AtomicU64::new(0),
            session_count: AtomicU64::new(0),
        })
    }

    /// In-memory server with default options and a detached log sink.
    pub fn ephemeral() -> Arc<Self> {
        let config = Config::default();
        let log_sink = LogSink::detached(config.log_level());
        Self::open_with_config(config, log_sink)
    }

    /// Open a new session against this server.
    pub fn new_session(self: &Arc<Self>) -> Session {
        self.session_count.fetch_add(1, Ordering::AcqRel);
        Session::new(Arc::clone(self))
    }

    /// Global catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Process-wide configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Live log sink.
    pub fn log_sink(&self) -> &LogSink {
        &self.log_sink
    }

    /// Change the log level in the persisted config and the live sink.
    ///
    /// The config is written first. If the sink then refuses the level, the
    /// config goes back to the previous level and the sink error is returned.
    /// Changes from different sessions are applied one at a time, so the
    /// config and the sink agree whenever no change is in flight.
    pub fn set_log_level(&self, level: LogLevel) -> EngineResult<LogLevel> {
        let _commit = self.log_level_commit.lock();
        let previous = self.config.log_level();
        self.config.set_log_level(level)?;
        if let Err(e) = self.log_sink.set_level(level) {
            self.config.set_log_level(previous)?;
            return Err(e);
        }
        Ok(previous)
    }

    /// When the server started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Whole seconds since the server started.
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }

    /// Queries executed across all sessions.
    pub fn query_count(&self) -> u64 {
        self.query_count.load(Ordering::Acquire)
    }

    /// Sessions currently open.
    pub fn session_count(&self) -> u64 {
        self.session_count.load(Ordering::Acquire)
    }

    pub(crate) fn record_query(&self) {
        self.query_count.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn release_session(&self) {
        self.session_count.fetch_sub(1, Ordering::AcqRel);
    }
}
