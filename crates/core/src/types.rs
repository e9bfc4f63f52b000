//! Scope types for settable variables
//!
//! A variable lives in exactly one namespace:
//! - Session: per-connection, dies with the connection
//! - Global: process-wide server state shared by every session
//! - Config: process-wide configuration, persisted across restarts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace a `SET` statement targets.
///
/// `Invalid` is what the front end produces when a statement names no
/// recognised scope. Executing it is an error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetScope {
    /// Per-connection variables
    Session,
    /// Process-wide variables
    Global,
    /// Configuration parameters
    Config,
    /// Unrecognised scope
    Invalid,
}

impl SetScope {
    /// Keyword used in SQL text.
    pub fn as_str(&self) -> &'static str {
        match self {
            SetScope::Session => "SESSION",
            SetScope::Global => "GLOBAL",
            SetScope::Config => "CONFIG",
            SetScope::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for SetScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_display() {
        assert_eq!(SetScope::Session.to_string(), "SESSION");
        assert_eq!(SetScope::Global.to_string(), "GLOBAL");
        assert_eq!(SetScope::Config.to_string(), "CONFIG");
    }

    #[test]
    fn test_scope_serde() {
        let json = serde_json::to_string(&SetScope::Config).unwrap();
        assert_eq!(json, "\"Config\"");
        let back: SetScope = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SetScope::Config);
    }
}
