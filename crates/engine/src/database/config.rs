//! Server configuration via `vela.toml`
//!
//! [`ConfigOptions`] is the on-disk shape. [`Config`] is the process-wide
//! object every session reads: the options live behind a lock and, when the
//! config was loaded from a file, every accepted change is written back so a
//! restart sees the same values.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vela_core::{LogLevel, SetValue};

use crate::error::{EngineError, EngineResult};

/// Config file name placed in the server data directory.
pub const CONFIG_FILE_NAME: &str = "vela.toml";

/// Profile records kept per session until `profile_record_capacity` is set.
pub const DEFAULT_PROFILE_HISTORY_CAPACITY: usize = 100;

/// Server configuration loaded from `vela.toml`.
///
/// # Example
///
/// ```toml
/// time_zone = "utc"
/// log_level = "info"
/// log_to_stdout = true
/// profile_history_capacity = 100
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigOptions {
    /// Time zone used when rendering timestamps.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    /// Worker threads available to the pipeline scheduler.
    #[serde(default = "default_cpu_limit")]
    pub cpu_limit: u64,
    /// Data directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Directory for the log file. Empty disables file logging.
    #[serde(default)]
    pub log_dir: String,
    /// Log file name inside `log_dir`.
    #[serde(default = "default_log_filename")]
    pub log_filename: String,
    /// Mirror log output to stdout.
    #[serde(default = "default_log_to_stdout")]
    pub log_to_stdout: bool,
    /// Active log threshold.
    #[serde(default)]
    pub log_level: LogLevel,
    /// Initial per-session profile history capacity.
    #[serde(default = "default_profile_history_capacity")]
    pub profile_history_capacity: usize,
}

fn default_time_zone() -> String {
    "utc".to_string()
}

fn default_cpu_limit() -> u64 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u64)
        .unwrap_or(1)
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_log_filename() -> String {
    "vela.log".to_string()
}

fn default_log_to_stdout() -> bool {
    true
}

fn default_profile_history_capacity() -> usize {
    DEFAULT_PROFILE_HISTORY_CAPACITY
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            cpu_limit: default_cpu_limit(),
            data_dir: default_data_dir(),
            log_dir: String::new(),
            log_filename: default_log_filename(),
            log_to_stdout: default_log_to_stdout(),
            log_level: LogLevel::default(),
            profile_history_capacity: default_profile_history_capacity(),
        }
    }
}

impl ConfigOptions {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Vela server configuration
#
# Time zone used when rendering timestamps
time_zone = "utc"

# Data directory
data_dir = "data"

# Logging
#   log_level: one of trace, debug, info, warning, error, critical
#   log_dir:   directory for the log file; leave empty to disable file logging
log_level = "info"
log_to_stdout = true
log_dir = ""
log_filename = "vela.log"

# Profile records kept per session (changeable at runtime with
# SET GLOBAL profile_record_capacity = <n>)
profile_history_capacity = 100
"#
    }

    /// Read and parse options from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> EngineResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            EngineError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> EngineResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                EngineError::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize these options to TOML and write them to the given path.
    pub fn write_to_file(&self, path: &Path) -> EngineResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EngineError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            EngineError::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

/// Index of a named configuration parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalOptionIndex {
    /// `time_zone`
    TimeZone,
    /// `cpu_limit`
    CpuLimit,
    /// `data_dir`
    DataDir,
    /// `log_dir`
    LogDir,
    /// `log_filename`
    LogFilename,
    /// `log_to_stdout`
    LogToStdout,
    /// `log_level`
    LogLevel,
    /// `profile_history_capacity`
    ProfileHistoryCapacity,
}

impl GlobalOptionIndex {
    /// Every option, in declaration order.
    pub const ALL: [GlobalOptionIndex; 8] = [
        GlobalOptionIndex::TimeZone,
        GlobalOptionIndex::CpuLimit,
        GlobalOptionIndex::DataDir,
        GlobalOptionIndex::LogDir,
        GlobalOptionIndex::LogFilename,
        GlobalOptionIndex::LogToStdout,
        GlobalOptionIndex::LogLevel,
        GlobalOptionIndex::ProfileHistoryCapacity,
    ];

    /// Parameter name as written in `vela.toml` and `SET CONFIG`.
    pub fn name(&self) -> &'static str {
        match self {
            GlobalOptionIndex::TimeZone => "time_zone",
            GlobalOptionIndex::CpuLimit => "cpu_limit",
            GlobalOptionIndex::DataDir => "data_dir",
            GlobalOptionIndex::LogDir => "log_dir",
            GlobalOptionIndex::LogFilename => "log_filename",
            GlobalOptionIndex::LogToStdout => "log_to_stdout",
            GlobalOptionIndex::LogLevel => "log_level",
            GlobalOptionIndex::ProfileHistoryCapacity => "profile_history_capacity",
        }
    }

    /// Whether the parameter may be changed while the server runs.
    pub fn is_writable(&self) -> bool {
        match self {
            GlobalOptionIndex::LogLevel => true,
            GlobalOptionIndex::TimeZone
            | GlobalOptionIndex::CpuLimit
            | GlobalOptionIndex::DataDir
            | GlobalOptionIndex::LogDir
            | GlobalOptionIndex::LogFilename
            | GlobalOptionIndex::LogToStdout
            | GlobalOptionIndex::ProfileHistoryCapacity => false,
        }
    }
}

/// Process-wide configuration shared by every session.
#[derive(Debug)]
pub struct Config {
    options: RwLock<ConfigOptions>,
    /// Backing file; `None` keeps changes in memory only
    path: Option<PathBuf>,
}

impl Config {
    /// In-memory config that is never written to disk.
    pub fn new(options: ConfigOptions) -> Self {
        Self {
            options: RwLock::new(options),
            path: None,
        }
    }

    /// Load the config at `path`, creating a default file first if needed.
    /// Accepted changes are written back to the same file.
    pub fn open(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref().to_path_buf();
        ConfigOptions::write_default_if_missing(&path)?;
        let options = ConfigOptions::from_file(&path)?;
        Ok(Self {
            options: RwLock::new(options),
            path: Some(path),
        })
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Look up a parameter by name. `None` means the name is unknown.
    pub fn option_index(&self, name: &str) -> Option<GlobalOptionIndex> {
        GlobalOptionIndex::ALL
            .iter()
            .copied()
            .find(|idx| idx.name() == name)
    }

    /// Snapshot of every option.
    pub fn options(&self) -> ConfigOptions {
        self.options.read().clone()
    }

    /// Current value of one parameter.
    pub fn option_value(&self, index: GlobalOptionIndex) -> SetValue {
        let options = self.options.read();
        match index {
            GlobalOptionIndex::TimeZone => SetValue::String(options.time_zone.clone()),
            GlobalOptionIndex::CpuLimit => SetValue::Integer(options.cpu_limit as i64),
            GlobalOptionIndex::DataDir => SetValue::String(options.data_dir.clone()),
            GlobalOptionIndex::LogDir => SetValue::String(options.log_dir.clone()),
            GlobalOptionIndex::LogFilename => SetValue::String(options.log_filename.clone()),
            GlobalOptionIndex::LogToStdout => SetValue::Bool(options.log_to_stdout),
            GlobalOptionIndex::LogLevel => SetValue::String(options.log_level.to_string()),
            GlobalOptionIndex::ProfileHistoryCapacity => {
                SetValue::Integer(options.profile_history_capacity as i64)
            }
        }
    }

    /// Persisted log level.
    pub fn log_level(&self) -> LogLevel {
        self.options.read().log_level
    }

    /// Record a new log level, writing it to the backing file first.
    ///
    /// The write lock is held across the file write, so readers see either
    /// the old or the new level. If the file write fails nothing changes.
    pub fn set_log_level(&self, level: LogLevel) -> EngineResult<()> {
        let mut options = self.options.write();
        if let Some(path) = &self.path {
            let updated = ConfigOptions {
                log_level: level,
                ..options.clone()
            };
            updated.write_to_file(path)?;
        }
        options.log_level = level;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(ConfigOptions::default())
    }
}
