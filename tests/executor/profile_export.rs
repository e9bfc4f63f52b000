//! Profile export tests
//!
//! Records are produced by profiled sessions and written out as JSON.

use std::fs;

use crate::common::*;
use tempfile::TempDir;
use vela::{Command, Error, SetScope};
use vela_engine::ProfileRecord;

fn export(file_no: u64, path: &std::path::Path) -> Command {
    Command::Export {
        file_no,
        file_name: path.to_string_lossy().into_owned(),
    }
}

#[test]
fn exported_json_matches_history() {
    let dir = TempDir::new().unwrap();
    let executor = create_executor();
    let mut session = executor.open_session();

    executor
        .execute(&mut session, set(SetScope::Session, "enable_profile", true))
        .unwrap();
    executor.execute(&mut session, use_db("a")).unwrap();
    executor.execute(&mut session, use_db("b")).unwrap();

    let path = dir.path().join("one.json");
    executor.execute(&mut session, export(1, &path)).unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["sequence"], 1);
    assert_eq!(json["query"], "USE b");
    assert!(json["total_ns"].is_u64());
    assert_eq!(json["phases"].as_array().unwrap().len(), 2);
}

#[test]
fn evicted_record_is_data_not_exist() {
    let dir = TempDir::new().unwrap();
    let executor = create_executor();
    let mut session = executor.open_session();

    executor
        .execute(
            &mut session,
            set(SetScope::Global, "profile_record_capacity", 1i64),
        )
        .unwrap();
    executor
        .execute(&mut session, set(SetScope::Session, "enable_profile", true))
        .unwrap();
    executor.execute(&mut session, use_db("a")).unwrap();
    executor.execute(&mut session, use_db("b")).unwrap();

    let path = dir.path().join("gone.json");
    let err = executor.execute(&mut session, export(0, &path)).unwrap_err();
    assert!(matches!(err, Error::DataNotExist { .. }));
    assert!(!path.exists());

    executor.execute(&mut session, export(1, &path)).unwrap();
    let record: ProfileRecord = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(record.query, "USE b");
}

#[test]
fn export_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("p.json");
    fs::write(&path, "x".repeat(10_000)).unwrap();

    let executor = create_executor();
    let mut session = executor.open_session();
    session.set_profile(true);
    executor.execute(&mut session, use_db("a")).unwrap();
    executor.execute(&mut session, export(0, &path)).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(serde_json::from_str::<ProfileRecord>(&written).is_ok());
}
