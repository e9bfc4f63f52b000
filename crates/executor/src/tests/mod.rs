//! Test modules for the executor crate.


use vela_core::{SetScope, SetValue};

use crate::Command;

pub(crate) fn set(scope: SetScope, name: &str, value: impl Into<SetValue>) -> Command {
    Command::Set {
        scope,
        name: name.to_string(),
        value: value.into(),
    }
}
