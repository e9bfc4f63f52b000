//! Command enum describing administrative statements.
//!
//! The SQL front end resolves a statement into one of these variants. Commands
//! are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Typed**: A `SET` value carries its own type tag, so tag and payload
//!   never disagree
//! - **Pure data**: No closures or executable code

use serde::{Deserialize, Serialize};
use std::fmt;
use vela_core::{SetScope, SetValue};

/// A resolved administrative command.
///
/// `Use`, `Set`, `Export` and `CheckTable` are executed by the command
/// operator. `LockTable`, `UnlockTable` and `Cleanup` are produced by the
/// same front end but scheduled onto other operators; one reaching the command
/// operator means the planner is broken.
///
/// # Example
///
/// ```ignore
/// use vela_executor::Command;
/// use vela_core::{SetScope, SetValue};
///
/// let cmd = Command::Set {
///     scope: SetScope::Session,
///     name: "enable_profile".into(),
///     value: SetValue::Bool(true),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Switch the session's active schema.
    Use {
        /// Schema to switch to; existence is not checked
        db_name: String,
    },

    /// Assign a variable in one of the three scopes.
    Set {
        /// Session, global or config
        scope: SetScope,
        /// Variable name
        name: String,
        /// New value, carrying its own type
        value: SetValue,
    },

    /// Write a retained profile record to a JSON file.
    Export {
        /// Sequence number of the profile record
        file_no: u64,
        /// Target path
        file_name: String,
    },

    /// Reserved maintenance check; currently a no-op.
    CheckTable {
        /// Schema, if qualified
        #[serde(default, skip_serializing_if = "Option::is_none")]
        db_name: Option<String>,
        /// Table name
        table_name: String,
    },

    /// Take a table lock (table-lock operator).
    LockTable {
        /// Schema
        db_name: String,
        /// Table name
        table_name: String,
    },

    /// Release a table lock (table-lock operator).
    UnlockTable {
        /// Schema
        db_name: String,
        /// Table name
        table_name: String,
    },

    /// Reclaim obsolete files (cleanup operator).
    Cleanup,
}

impl Command {
    /// Short name of the command kind.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Use { .. } => "Use",
            Command::Set { .. } => "Set",
            Command::Export { .. } => "Export",
            Command::CheckTable { .. } => "CheckTable",
            Command::LockTable { .. } => "LockTable",
            Command::UnlockTable { .. } => "UnlockTable",
            Command::Cleanup => "Cleanup",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Use { db_name } => write!(f, "USE {}", db_name),
            Command::Set { scope, name, value } => write!(f, "SET {} {} = {}", scope, name, value),
            Command::Export { file_no, file_name } => {
                write!(f, "EXPORT PROFILE {} TO '{}'", file_no, file_name)
            }
            Command::CheckTable {
                db_name: Some(db),
                table_name,
            } => write!(f, "CHECK TABLE {}.{}", db, table_name),
            Command::CheckTable {
                db_name: None,
                table_name,
            } => write!(f, "CHECK TABLE {}", table_name),
            Command::LockTable {
                db_name,
                table_name,
            } => write!(f, "LOCK TABLE {}.{}", db_name, table_name),
            Command::UnlockTable {
                db_name,
                table_name,
            } => write!(f, "UNLOCK TABLE {}.{}", db_name, table_name),
            Command::Cleanup => write!(f, "CLEANUP"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let set = Command::Set {
            scope: SetScope::Config,
            name: "log_level".into(),
            value: SetValue::from("debug"),
        };
        assert_eq!(set.to_string(), "SET CONFIG log_level = 'debug'");

        let export = Command::Export {
            file_no: 2,
            file_name: "/tmp/p.json".into(),
        };
        assert_eq!(export.to_string(), "EXPORT PROFILE 2 TO '/tmp/p.json'");

        let check = Command::CheckTable {
            db_name: None,
            table_name: "t1".into(),
        };
        assert_eq!(check.to_string(), "CHECK TABLE t1");
    }

    #[test]
    fn test_names() {
        assert_eq!(Command::Cleanup.name(), "Cleanup");
        assert_eq!(
            Command::Use {
                db_name: "x".into()
            }
            .name(),
            "Use"
        );
    }

    #[test]
    fn test_check_table_omits_absent_db() {
        let cmd = Command::CheckTable {
            db_name: None,
            table_name: "t".into(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(!json.contains("db_name"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let json = r#"{"Use":{"db_name":"x","extra":1}}"#;
        assert!(serde_json::from_str::<Command>(json).is_err());
    }
}
