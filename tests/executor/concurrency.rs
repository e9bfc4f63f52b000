//! Concurrency tests
//!
//! Sessions on different threads share the catalog and config.

use std::sync::Arc;
use std::thread;

use crate::common::*;
use vela::{Executor, LogLevel, SetScope};

#[test]
fn concurrent_capacity_writes_land_on_a_written_value() {
    let executor = Arc::new(create_executor());
    let handles: Vec<_> = (1..=8i64)
        .map(|n| {
            let executor = Arc::clone(&executor);
            thread::spawn(move || {
                let mut session = executor.open_session();
                for _ in 0..50 {
                    executor
                        .execute(
                            &mut session,
                            set(SetScope::Global, "profile_record_capacity", n),
                        )
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let capacity = executor.database().catalog().profile_history_capacity();
    assert!((1..=8).contains(&capacity));
    assert_eq!(executor.database().query_count(), 8 * 50);
    assert_eq!(executor.database().session_count(), 0);
}

#[test]
fn concurrent_log_level_changes_stay_consistent() {
    let (dir, executor) = create_persisted_executor();
    let executor: Arc<Executor> = Arc::new(executor);
    let levels = [LogLevel::Debug, LogLevel::Error, LogLevel::Trace, LogLevel::Warning];

    let handles: Vec<_> = levels
        .into_iter()
        .map(|level| {
            let executor = Arc::clone(&executor);
            thread::spawn(move || {
                let mut session = executor.open_session();
                for _ in 0..20 {
                    executor
                        .execute(&mut session, set(SetScope::Config, "log_level", level.as_str()))
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let persisted = executor.database().config().log_level();
    assert!(levels.contains(&persisted));
    assert_eq!(executor.database().log_sink().level(), persisted);
    let on_disk = vela_engine::ConfigOptions::from_file(&dir.path().join(vela_engine::CONFIG_FILE_NAME))
        .unwrap()
        .log_level;
    assert_eq!(on_disk, persisted);
}
