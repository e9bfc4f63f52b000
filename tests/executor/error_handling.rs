//! Error handling tests
//!
//! Recoverable errors abort only the failing command; fatal errors panic
//! after the operator has signalled completion.

use std::panic::{self, AssertUnwindSafe};

use crate::common::*;
use vela::{
    Command, Error, LogLevel, OperatorState, PhysicalCommand, PhysicalOperator, QueryContext,
    SetScope, VALID_LOG_LEVELS,
};

#[test]
fn unknown_is_never_reported_as_read_only() {
    let executor = create_executor();
    let mut session = executor.open_session();

    for scope in [SetScope::Session, SetScope::Global] {
        match executor.execute(&mut session, set(scope, "definitely_unknown", 1i64)) {
            Err(Error::InvalidCommand { reason }) => {
                assert!(reason.contains("definitely_unknown"));
                assert!(!reason.contains("read-only"));
            }
            other => panic!("Expected InvalidCommand, got {:?}", other),
        }
    }
}

#[test]
fn read_only_is_never_reported_as_unknown() {
    let executor = create_executor();
    let mut session = executor.open_session();

    for (scope, name) in [
        (SetScope::Session, "query_count"),
        (SetScope::Global, "uptime_seconds"),
        (SetScope::Config, "data_dir"),
    ] {
        match executor.execute(&mut session, set(scope, name, "x")) {
            Err(Error::InvalidCommand { reason }) => {
                assert!(reason.contains("read-only"), "{}", reason);
                assert!(!reason.starts_with("Unknown"), "{}", reason);
            }
            other => panic!("Expected InvalidCommand, got {:?}", other),
        }
    }
}

#[test]
fn invalid_level_leaves_prior_level() {
    let (_dir, executor) = create_persisted_executor();
    let mut session = executor.open_session();

    executor
        .execute(&mut session, set(SetScope::Config, "log_level", "error"))
        .unwrap();
    let err = executor
        .execute(&mut session, set(SetScope::Config, "log_level", "Error"))
        .unwrap_err();

    assert_eq!(
        err,
        Error::SetInvalidVarValue {
            name: "log level".to_string(),
            valid_values: VALID_LOG_LEVELS.to_string(),
        }
    );
    assert_eq!(executor.database().log_sink().level(), LogLevel::Error);
    assert_eq!(executor.database().config().log_level(), LogLevel::Error);
}

#[test]
fn session_survives_recoverable_error() {
    let executor = create_executor();
    let mut session = executor.open_session();

    assert!(executor
        .execute(&mut session, set(SetScope::Session, "enable_profile", "yes"))
        .is_err());
    executor.execute(&mut session, use_db("after")).unwrap();
    assert_eq!(session.current_database(), "after");
}

#[test]
fn misrouted_command_completes_then_panics() {
    let executor = create_executor();
    let mut session = executor.open_session();
    let state = OperatorState::new();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut op = PhysicalCommand::new(Command::LockTable {
            db_name: "d".into(),
            table_name: "t".into(),
        });
        op.init();
        op.execute(&mut QueryContext::new(&mut session), &state)
    }));

    assert!(outcome.is_err());
    assert!(state.is_complete());
}

#[test]
fn tasklet_count_is_fatal() {
    let outcome = panic::catch_unwind(|| PhysicalCommand::new(use_db("x")).tasklet_count());
    assert!(outcome.is_err());
}
