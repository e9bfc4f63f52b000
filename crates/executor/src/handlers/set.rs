//! `SET` command handlers.
//!
//! Each scope is resolved against its own registry. Failures are checked in
//! a fixed order: unknown name, then read-only, then value type. An unknown
//! name is therefore never reported as read-only and a read-only name never
//! as a type mismatch.

use tracing::{debug, info};
use vela_core::{LogLevel, SetScope, SetValue, SetVarType, VALID_LOG_LEVELS};
use vela_engine::{Database, GlobalOptionIndex, Session};

use crate::variables::{global_variable, session_variable, Access};
use crate::{Error, Result};

/// Handle a `SET` command in any scope.
pub fn set_variable(
    session: &mut Session,
    scope: SetScope,
    name: &str,
    value: &SetValue,
) -> Result<()> {
    match scope {
        SetScope::Session => set_session_variable(session, name, value),
        SetScope::Global => set_global_variable(session.database(), name, value),
        SetScope::Config => set_config_parameter(session.database(), name, value),
        SetScope::Invalid => Err(Error::invalid_command(
            "Invalid set command scope, neither session nor global",
        )),
    }
}

/// Handle `SET SESSION name = value`.
pub fn set_session_variable(session: &mut Session, name: &str, value: &SetValue) -> Result<()> {
    let def = session_variable(name)
        .ok_or_else(|| Error::invalid_command(format!("Unknown session variable: {}", name)))?;
    let apply = match def.access {
        Access::Writable(apply) => apply,
        Access::ReadOnly => {
            return Err(Error::invalid_command(format!(
                "Session variable {} is read-only",
                name
            )))
        }
    };
    if value.var_type() != def.expected_type {
        return Err(Error::type_mismatch(def.expected_type, value));
    }
    apply(session, value)?;
    debug!(target: "vela::set", session = %session.id(), name, %value, "Session variable set");
    Ok(())
}

/// Handle `SET GLOBAL name = value`.
pub fn set_global_variable(db: &Database, name: &str, value: &SetValue) -> Result<()> {
    let def = global_variable(name)
        .ok_or_else(|| Error::invalid_command(format!("Unknown global variable: {}", name)))?;
    let apply = match def.access {
        Access::Writable(apply) => apply,
        Access::ReadOnly => {
            return Err(Error::invalid_command(format!(
                "Global variable {} is read-only",
                name
            )))
        }
    };
    if value.var_type() != def.expected_type {
        return Err(Error::type_mismatch(def.expected_type, value));
    }
    apply(db, value)?;
    info!(target: "vela::set", name, %value, "Global variable set");
    Ok(())
}

/// Handle `SET CONFIG name = value`.
pub fn set_config_parameter(db: &Database, name: &str, value: &SetValue) -> Result<()> {
    let index = db
        .config()
        .option_index(name)
        .ok_or_else(|| Error::invalid_command(format!("Unknown config: {}", name)))?;
    match index {
        GlobalOptionIndex::LogLevel => {
            let literal = value
                .as_str()
                .ok_or_else(|| Error::type_mismatch(SetVarType::String, value))?;
            set_log_level(db, literal)
        }
        GlobalOptionIndex::TimeZone
        | GlobalOptionIndex::CpuLimit
        | GlobalOptionIndex::DataDir
        | GlobalOptionIndex::LogDir
        | GlobalOptionIndex::LogFilename
        | GlobalOptionIndex::LogToStdout
        | GlobalOptionIndex::ProfileHistoryCapacity => {
            Err(Error::invalid_command(format!("Config {} is read-only", name)))
        }
    }
}

/// Parse a log-level literal and apply it through [`Database::set_log_level`].
fn set_log_level(db: &Database, literal: &str) -> Result<()> {
    let level: LogLevel = literal.parse().map_err(|_| Error::SetInvalidVarValue {
        name: "log level".to_string(),
        valid_values: VALID_LOG_LEVELS.to_string(),
    })?;

    let previous = db.set_log_level(level)?;
    info!(target: "vela::set", from = %previous, to = %level, "Log level changed");
    Ok(())
}

/// Current value of a session variable.
pub fn read_session_variable(session: &Session, name: &str) -> Result<SetValue> {
    session_variable(name)
        .map(|def| (def.read)(session))
        .ok_or_else(|| Error::invalid_command(format!("Unknown session variable: {}", name)))
}

/// Current value of a global variable.
pub fn read_global_variable(db: &Database, name: &str) -> Result<SetValue> {
    global_variable(name)
        .map(|def| (def.read)(db))
        .ok_or_else(|| Error::invalid_command(format!("Unknown global variable: {}", name)))
}

/// Current value of a config parameter.
pub fn read_config_parameter(db: &Database, name: &str) -> Result<SetValue> {
    db.config()
        .option_index(name)
        .map(|index| db.config().option_value(index))
        .ok_or_else(|| Error::invalid_command(format!("Unknown config: {}", name)))
}
