//! Value types carried by `SET` commands
//!
//! This module defines:
//! - SetValue: the typed right-hand side of a `SET` statement
//! - SetVarType: the declared type of a settable variable
//!
//! ## Type Rules
//!
//! - The type tag of a `SetValue` is derived from its variant, so the tag and
//!   the payload can never disagree.
//! - No implicit coercions: `Integer(1)` does not satisfy a `Double`
//!   variable and `String("true")` does not satisfy a `Boolean` one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a settable variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetVarType {
    /// `true` / `false`
    Bool,
    /// 64-bit signed integer
    Integer,
    /// 64-bit floating point
    Double,
    /// UTF-8 string
    String,
}

impl SetVarType {
    /// Human readable type name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            SetVarType::Bool => "Boolean",
            SetVarType::Integer => "Integer",
            SetVarType::Double => "Double",
            SetVarType::String => "String",
        }
    }
}

impl fmt::Display for SetVarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The typed value of a `SET` statement, already checked by the SQL front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SetValue {
    /// Boolean literal
    Bool(bool),
    /// Integer literal
    Integer(i64),
    /// Floating point literal
    Double(f64),
    /// String literal
    String(String),
}

impl SetValue {
    /// The type tag of this value.
    pub fn var_type(&self) -> SetVarType {
        match self {
            SetValue::Bool(_) => SetVarType::Bool,
            SetValue::Integer(_) => SetVarType::Integer,
            SetValue::Double(_) => SetVarType::Double,
            SetValue::String(_) => SetVarType::String,
        }
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        self.var_type().name()
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SetValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SetValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Double value
    pub fn as_double(&self) -> Option<f64> {
        match self {
            SetValue::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SetValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for SetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetValue::Bool(b) => write!(f, "{}", b),
            SetValue::Integer(i) => write!(f, "{}", i),
            SetValue::Double(d) => write!(f, "{}", d),
            SetValue::String(s) => write!(f, "'{}'", s),
        }
    }
}

impl From<bool> for SetValue {
    fn from(b: bool) -> Self {
        SetValue::Bool(b)
    }
}

impl From<i64> for SetValue {
    fn from(i: i64) -> Self {
        SetValue::Integer(i)
    }
}

impl From<f64> for SetValue {
    fn from(d: f64) -> Self {
        SetValue::Double(d)
    }
}

impl From<&str> for SetValue {
    fn from(s: &str) -> Self {
        SetValue::String(s.to_string())
    }
}

impl From<String> for SetValue {
    fn from(s: String) -> Self {
        SetValue::String(s)
    }
}
