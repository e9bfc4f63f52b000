//! Integration tests for Database::open()
//!
//! These tests verify the complete open flow including:
//! - Creating a default config file
//! - Installing the global log subscriber
//! - Driving the installed filter through the log sink
//!
//! Only one subscriber can be installed per process, so the flow lives in a
//! single test.

use std::fs;

use tempfile::TempDir;
use vela_core::LogLevel;
use vela_engine::{ConfigOptions, Database, EngineError, CONFIG_FILE_NAME};

#[test]
fn test_database_open_lifecycle() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

    let options = ConfigOptions {
        log_dir: log_dir.to_string_lossy().into_owned(),
        log_to_stdout: false,
        profile_history_capacity: 5,
        ..ConfigOptions::default()
    };
    options.write_to_file(&config_path).unwrap();

    // Phase 1: open installs the subscriber and writes to the log file
    let db = Database::open(&config_path).expect("Failed to open database");
    assert!(db.log_sink().is_attached());
    assert_eq!(db.log_sink().level(), LogLevel::Info);
    assert_eq!(db.catalog().profile_history_capacity(), 5);
    assert_eq!(db.config().path(), Some(config_path.as_path()));

    let log_file = log_dir.join(&options.log_filename);
    let contents = fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("Database opened"));

    // Phase 2: the sink drives the live filter
    db.log_sink().set_level(LogLevel::Error).unwrap();
    tracing::info!("suppressed after raising the level");
    let contents = fs::read_to_string(&log_file).unwrap();
    assert!(!contents.contains("suppressed after raising the level"));

    // Phase 3: a second subscriber is refused
    let other = TempDir::new().unwrap();
    let err = Database::open(other.path().join(CONFIG_FILE_NAME)).unwrap_err();
    assert!(matches!(err, EngineError::Logging(_)));
    assert!(other.path().join(CONFIG_FILE_NAME).exists());
}
