//! Session and global variable registries.
//!
//! Each registry is a fixed table built into the binary. Every entry states
//! its own type and whether it can be written, so the `SET` handlers never
//! need a fall-through arm to decide that something is read-only.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use vela_core::{SetValue, SetVarType};
use vela_engine::{Database, Session};

use crate::{Error, Result};

/// Whether a variable accepts `SET`, and how.
#[derive(Clone, Copy)]
pub enum Access<W> {
    /// Visible but not assignable
    ReadOnly,
    /// Assignable through the given function
    Writable(W),
}

impl<W> Access<W> {
    /// Whether the variable accepts `SET`.
    pub fn is_writable(&self) -> bool {
        matches!(self, Access::Writable(_))
    }
}

/// One registry entry.
pub struct VariableDef<R, W> {
    /// Variable name as used in `SET`
    pub name: &'static str,
    /// Declared type; assignments of another type are rejected
    pub expected_type: SetVarType,
    /// Current value
    pub read: R,
    /// Write policy
    pub access: Access<W>,
}

/// Session-scoped variable.
pub type SessionVariable = VariableDef<fn(&Session) -> SetValue, fn(&mut Session, &SetValue) -> Result<()>>;

/// Server-wide variable.
pub type GlobalVariable = VariableDef<fn(&Database) -> SetValue, fn(&Database, &SetValue) -> Result<()>>;

// =============================================================================
// Session registry
// =============================================================================

fn read_enable_profile(session: &Session) -> SetValue {
    SetValue::Bool(session.profile_enabled())
}

fn write_enable_profile(session: &mut Session, value: &SetValue) -> Result<()> {
    let enabled = value
        .as_bool()
        .ok_or_else(|| Error::type_mismatch(SetVarType::Bool, value))?;
    session.set_profile(enabled);
    Ok(())
}

fn read_session_query_count(session: &Session) -> SetValue {
    SetValue::Integer(session.query_count() as i64)
}

fn read_current_database(session: &Session) -> SetValue {
    SetValue::String(session.current_database().to_string())
}

fn read_connected_timestamp(session: &Session) -> SetValue {
    SetValue::String(session.connected_at().to_rfc3339())
}

/// Every session variable.
pub static SESSION_VARIABLES: &[SessionVariable] = &[
    VariableDef {
        name: "enable_profile",
        expected_type: SetVarType::Bool,
        read: read_enable_profile,
        access: Access::Writable(write_enable_profile),
    },
    VariableDef {
        name: "query_count",
        expected_type: SetVarType::Integer,
        read: read_session_query_count,
        access: Access::ReadOnly,
    },
    VariableDef {
        name: "current_database",
        expected_type: SetVarType::String,
        read: read_current_database,
        access: Access::ReadOnly,
    },
    VariableDef {
        name: "connected_timestamp",
        expected_type: SetVarType::String,
        read: read_connected_timestamp,
        access: Access::ReadOnly,
    },
];

// =============================================================================
// Global registry
// =============================================================================

fn read_profile_record_capacity(db: &Database) -> SetValue {
    SetValue::Integer(db.catalog().profile_history_capacity() as i64)
}

fn write_profile_record_capacity(db: &Database, value: &SetValue) -> Result<()> {
    let capacity = value
        .as_int()
        .ok_or_else(|| Error::type_mismatch(SetVarType::Integer, value))?;
    let capacity = usize::try_from(capacity).map_err(|_| Error::SetInvalidVarValue {
        name: "profile_record_capacity".to_string(),
        valid_values: "non-negative integers".to_string(),
    })?;
    db.catalog().resize_profile_history(capacity);
    Ok(())
}

fn read_global_query_count(db: &Database) -> SetValue {
    SetValue::Integer(db.query_count() as i64)
}

fn read_session_count(db: &Database) -> SetValue {
    SetValue::Integer(db.session_count() as i64)
}

fn read_uptime_seconds(db: &Database) -> SetValue {
    SetValue::Integer(db.uptime_seconds())
}

/// Every global variable.
pub static GLOBAL_VARIABLES: &[GlobalVariable] = &[
    VariableDef {
        name: "profile_record_capacity",
        expected_type: SetVarType::Integer,
        read: read_profile_record_capacity,
        access: Access::Writable(write_profile_record_capacity),
    },
    VariableDef {
        name: "query_count",
        expected_type: SetVarType::Integer,
        read: read_global_query_count,
        access: Access::ReadOnly,
    },
    VariableDef {
        name: "session_count",
        expected_type: SetVarType::Integer,
        read: read_session_count,
        access: Access::ReadOnly,
    },
    VariableDef {
        name: "uptime_seconds",
        expected_type: SetVarType::Integer,
        read: read_uptime_seconds,
        access: Access::ReadOnly,
    },
];

// =============================================================================
// Lookup
// =============================================================================

static SESSION_INDEX: Lazy<HashMap<&'static str, &'static SessionVariable>> =
    Lazy::new(|| SESSION_VARIABLES.iter().map(|v| (v.name, v)).collect());

static GLOBAL_INDEX: Lazy<HashMap<&'static str, &'static GlobalVariable>> =
    Lazy::new(|| GLOBAL_VARIABLES.iter().map(|v| (v.name, v)).collect());

/// Session variable named `name`, or `None` if there is no such variable.
pub fn session_variable(name: &str) -> Option<&'static SessionVariable> {
    SESSION_INDEX.get(name).copied()
}

/// Global variable named `name`, or `None` if there is no such variable.
pub fn global_variable(name: &str) -> Option<&'static GlobalVariable> {
    GLOBAL_INDEX.get(name).copied()
}
