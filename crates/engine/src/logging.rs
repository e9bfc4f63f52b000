//! Logging initialisation and the live log sink.
//!
//! [`init_logging`] installs the global `tracing` subscriber. Its level
//! filter sits behind a `reload` layer so the threshold can change while the
//! server runs; the returned [`LogSink`] owns the reload handle.

use std::fs::{self, OpenOptions};
use std::path::Path;

use parking_lot::RwLock;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{reload, Registry};
use vela_core::LogLevel;

use crate::database::ConfigOptions;
use crate::error::{EngineError, EngineResult};

/// `tracing` has no critical level; critical maps onto ERROR.
pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warning => LevelFilter::WARN,
        LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
    }
}

/// Target of every critical event.
pub const CRITICAL_TARGET: &str = "vela::critical";

/// Emit an event at critical severity.
///
/// Critical events are logged at ERROR under [`CRITICAL_TARGET`] and carry
/// `critical = true`; filter on either to select them.
pub fn critical(message: &str) {
    tracing::error!(target: "vela::critical", critical = true, "{}", message);
}

/// Live log threshold.
pub struct LogSink {
    level: RwLock<LogLevel>,
    handle: Option<reload::Handle<LevelFilter, Registry>>,
}

impl LogSink {
    /// A sink that tracks the level without driving any subscriber.
    pub fn detached(level: LogLevel) -> Self {
        Self {
            level: RwLock::new(level),
            handle: None,
        }
    }

    /// A sink driving the filter behind `handle`, currently at `level`.
    pub fn attached(level: LogLevel, handle: reload::Handle<LevelFilter, Registry>) -> Self {
        Self {
            level: RwLock::new(level),
            handle: Some(handle),
        }
    }

    /// Whether the sink drives the installed subscriber.
    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Active level.
    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// Change the active level.
    pub fn set_level(&self, level: LogLevel) -> EngineResult<()> {
        let mut current = self.level.write();
        if let Some(handle) = &self.handle {
            handle
                .reload(level_filter(level))
                .map_err(|e| EngineError::logging(format!("failed to reload log level: {}", e)))?;
        }
        *current = level;
        Ok(())
    }
}

impl std::fmt::Debug for LogSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogSink")
            .field("level", &self.level())
            .field("attached", &self.is_attached())
            .finish()
    }
}

/// Install the global subscriber described by `options`.
///
/// Sets up `tracing-subscriber` with:
///  - a reloadable level filter starting at `options.log_level`
///  - a stdout layer when `log_to_stdout` is set
///  - an append-mode file layer at `log_dir/log_filename` when `log_dir` is set
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(options: &ConfigOptions) -> EngineResult<LogSink> {
    let (filter, handle) = reload::Layer::new(level_filter(options.log_level));

    let stdout_layer = options
        .log_to_stdout
        .then(|| tracing_subscriber::fmt::layer().with_target(true));

    let file_layer = if options.log_dir.is_empty() {
        None
    } else {
        let dir = Path::new(&options.log_dir);
        fs::create_dir_all(dir)?;
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(&options.log_filename))?;
        Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_thread_names(true)
                .with_writer(log_file),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| EngineError::logging(format!("failed to install subscriber: {}", e)))?;

    tracing::trace!(
        log_level = %options.log_level,
        stdout = options.log_to_stdout,
        dir = %options.log_dir,
        "Logging initialized"
    );

    Ok(LogSink::attached(options.log_level, handle))
}
