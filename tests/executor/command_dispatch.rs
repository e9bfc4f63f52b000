//! Command dispatch tests
//!
//! Each command kind the operator accepts, driven through the Executor.

use crate::common::*;
use vela::{read_global_variable, read_session_variable, Command, SetScope, SetValue};

#[test]
fn use_switches_schema_without_validation() {
    let executor = create_executor();
    let mut session = executor.open_session();

    executor
        .execute(&mut session, use_db("never_created"))
        .unwrap();
    assert_eq!(session.current_database(), "never_created");

    executor.execute(&mut session, use_db("")).unwrap();
    assert_eq!(session.current_database(), "");
}

#[test]
fn use_is_per_session() {
    let executor = create_executor();
    let mut a = executor.open_session();
    let b = executor.open_session();

    executor.execute(&mut a, use_db("sales")).unwrap();
    assert_eq!(a.current_database(), "sales");
    assert_eq!(b.current_database(), vela_engine::DEFAULT_DATABASE);
}

#[test]
fn check_table_always_succeeds() {
    let executor = create_executor();
    let mut session = executor.open_session();

    executor
        .execute(
            &mut session,
            Command::CheckTable {
                db_name: Some("missing".into()),
                table_name: "missing".into(),
            },
        )
        .unwrap();
}

#[test]
fn set_session_then_read_back() {
    let executor = create_executor();
    let mut session = executor.open_session();

    executor
        .execute(&mut session, set(SetScope::Session, "enable_profile", true))
        .unwrap();
    assert_eq!(
        read_session_variable(&session, "enable_profile").unwrap(),
        SetValue::Bool(true)
    );
}

#[test]
fn set_global_then_read_back() {
    let executor = create_executor();
    let mut session = executor.open_session();

    executor
        .execute(
            &mut session,
            set(SetScope::Global, "profile_record_capacity", 12i64),
        )
        .unwrap();
    assert_eq!(
        read_global_variable(executor.database(), "profile_record_capacity").unwrap(),
        SetValue::Integer(12)
    );
}

#[test]
fn session_count_tracks_open_sessions() {
    let executor = create_executor();
    let a = executor.open_session();
    let b = executor.open_session();
    assert_eq!(
        read_global_variable(executor.database(), "session_count").unwrap(),
        SetValue::Integer(2)
    );
    drop(a);
    drop(b);
    assert_eq!(executor.database().session_count(), 0);
}

#[test]
fn config_log_level_persists_across_reopen() {
    let (dir, executor) = create_persisted_executor();
    let mut session = executor.open_session();

    executor
        .execute(&mut session, set(SetScope::Config, "log_level", "warning"))
        .unwrap();
    drop(session);
    drop(executor);

    let reopened = vela_engine::Config::open(dir.path().join(vela_engine::CONFIG_FILE_NAME)).unwrap();
    assert_eq!(reopened.log_level(), vela::LogLevel::Warning);
}
