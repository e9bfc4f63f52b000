//! Log severity levels accepted by the `log_level` configuration parameter.
//!
//! Exactly six case-sensitive lowercase literals are valid, ordered from most
//! to least verbose: `trace, debug, info, warning, error, critical`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseLogLevelError;

/// The valid literals joined for error messages, in verbosity order.
pub const VALID_LOG_LEVELS: &str = "trace, debug, info, warning, error, critical";

/// Log severity threshold.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose
    Trace,
    /// Debug output
    Debug,
    /// Normal operation
    #[default]
    Info,
    /// Something unexpected but recoverable
    Warning,
    /// A failed operation
    Error,
    /// Invariant violation; least verbose
    Critical,
}

impl LogLevel {
    /// All levels, most verbose first. Parsing checks them in this order.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// The literal accepted by `SET CONFIG log_level`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLogLevelError {
                input: s.to_string(),
            })
    }
}
