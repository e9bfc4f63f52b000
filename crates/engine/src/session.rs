//! Per-connection session state.
//!
//! A [`Session`] is owned by exactly one connection. Everything it holds is
//! mutated only by commands that connection runs, so none of it is locked.
//! Shared state is reached through the [`Database`] handle.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::database::Database;
use crate::profiler::{ProfileHistory, ProfileRecord};

/// Schema a new session starts in.
pub const DEFAULT_DATABASE: &str = "default_db";

/// A connection's execution context.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    db: Arc<Database>,
    current_database: String,
    profile_enabled: bool,
    history: ProfileHistory,
    query_count: u64,
    connected_at: DateTime<Utc>,
}

impl Session {
    pub(crate) fn new(db: Arc<Database>) -> Self {
        Self {
            id: Uuid::new_v4(),
            db,
            current_database: DEFAULT_DATABASE.to_string(),
            profile_enabled: false,
            history: ProfileHistory::new(),
            query_count: 0,
            connected_at: Utc::now(),
        }
    }

    /// Session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Server this session belongs to.
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// Active schema.
    pub fn current_database(&self) -> &str {
        &self.current_database
    }

    /// Switch the active schema. Existence is not checked here.
    pub fn set_current_database(&mut self, name: impl Into<String>) {
        self.current_database = name.into();
    }

    /// Whether queries in this session are profiled.
    pub fn profile_enabled(&self) -> bool {
        self.profile_enabled
    }

    /// Turn profiling on or off.
    pub fn set_profile(&mut self, enabled: bool) {
        self.profile_enabled = enabled;
    }

    /// Store a finished profile under the next sequence number, bounded by
    /// the catalog's current capacity.
    pub fn store_profile_record(&mut self, record: ProfileRecord) -> u64 {
        let capacity = self.db.catalog().profile_history_capacity();
        self.history.push(record, capacity)
    }

    /// Profile with the given sequence number, if still retained.
    pub fn get_profile_record(&self, sequence: u64) -> Option<Arc<ProfileRecord>> {
        self.history.get(sequence)
    }

    /// Retained profile history.
    pub fn profile_history(&self) -> &ProfileHistory {
        &self.history
    }

    /// Queries this session has run.
    pub fn query_count(&self) -> u64 {
        self.query_count
    }

    /// Count one query on this session and on the server.
    pub fn record_query(&mut self) {
        self.query_count += 1;
        self.db.record_query();
    }

    /// When the connection was opened.
    pub fn connected_at(&self) -> DateTime<Utc> {
        self.connected_at
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.db.release_session();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiler::QueryProfiler;

    #[test]
    fn test_new_session_defaults() {
        let db = Database::ephemeral();
        let session = db.new_session();
        assert_eq!(session.current_database(), DEFAULT_DATABASE);
        assert!(!session.profile_enabled());
        assert!(session.profile_history().is_empty());
        assert_eq!(session.query_count(), 0);
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        let db = Database::ephemeral();
        let a = db.new_session();
        let b = db.new_session();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_store_and_get_profile() {
        let db = Database::ephemeral();
        let mut session = db.new_session();
        let seq = session.store_profile_record(QueryProfiler::new("USE x").finish());
        assert_eq!(seq, 0);
        assert_eq!(session.get_profile_record(0).unwrap().query, "USE x");
        assert!(session.get_profile_record(1).is_none());
    }

    #[test]
    fn test_store_respects_catalog_capacity() {
        let db = Database::ephemeral();
        let mut session = db.new_session();
        db.catalog().resize_profile_history(2);
        for i in 0..5 {
            session.store_profile_record(QueryProfiler::new(format!("q{}", i)).finish());
        }
        assert_eq!(session.profile_history().sequences(), vec![3, 4]);
    }

    #[test]
    fn test_record_query_counts_on_both_levels() {
        let db = Database::ephemeral();
        let mut a = db.new_session();
        let mut b = db.new_session();
        a.record_query();
        a.record_query();
        b.record_query();
        assert_eq!(a.query_count(), 2);
        assert_eq!(b.query_count(), 1);
        assert_eq!(db.query_count(), 3);
    }

    #[test]
    fn test_histories_are_per_session() {
        let db = Database::ephemeral();
        let mut a = db.new_session();
        let b = db.new_session();
        a.store_profile_record(QueryProfiler::new("only a").finish());
        assert!(a.get_profile_record(0).is_some());
        assert!(b.get_profile_record(0).is_none());
    }
}
