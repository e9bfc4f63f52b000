//! Common test utilities for executor tests

use std::sync::Arc;

use tempfile::TempDir;
use vela::{Command, Database, Executor, SetScope, SetValue};
use vela_engine::{Config, LogSink, CONFIG_FILE_NAME};

/// Create an executor with an in-memory database
pub fn create_executor() -> Executor {
    Executor::new(Database::ephemeral())
}

/// Create an executor whose config is persisted under a temp directory
pub fn create_persisted_executor() -> (TempDir, Executor) {
    let dir = TempDir::new().unwrap();
    let config = Config::open(dir.path().join(CONFIG_FILE_NAME)).unwrap();
    let sink = LogSink::detached(config.log_level());
    (dir, Executor::new(Database::open_with_config(config, sink)))
}

/// Create a database for shared use
#[allow(dead_code)]
pub fn create_db() -> Arc<Database> {
    Database::ephemeral()
}

/// Build a SET command
pub fn set(scope: SetScope, name: &str, value: impl Into<SetValue>) -> Command {
    Command::Set {
        scope,
        name: name.to_string(),
        value: value.into(),
    }
}

/// Build a USE command
pub fn use_db(name: &str) -> Command {
    Command::Use {
        db_name: name.to_string(),
    }
}
