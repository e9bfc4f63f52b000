//! Query profiling
//!
//! A [`QueryProfiler`] times the phases of one query and finishes into an
//! immutable [`ProfileRecord`]. Sessions keep finished records in a
//! [`ProfileHistory`], a bounded queue keyed by a monotonically increasing
//! sequence number that evicts the oldest record first.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wall time spent in one named phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTiming {
    /// Phase name
    pub name: String,
    /// Elapsed nanoseconds
    pub elapsed_ns: u64,
}

/// Execution profile of one finished query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Position in the owning session's history; assigned on insertion
    pub sequence: u64,
    /// Statement text
    pub query: String,
    /// When profiling started
    pub started_at: DateTime<Utc>,
    /// Elapsed nanoseconds from start to finish
    pub total_ns: u64,
    /// Per-phase timings in the order they ran
    pub phases: Vec<PhaseTiming>,
}

impl ProfileRecord {
    /// Serialize to the JSON document written by profile export.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Collects phase timings for a single query.
#[derive(Debug)]
pub struct QueryProfiler {
    query: String,
    started_at: DateTime<Utc>,
    start: Instant,
    phases: Vec<PhaseTiming>,
    current: Option<(&'static str, Instant)>,
}

impl QueryProfiler {
    /// Start profiling `query`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            started_at: Utc::now(),
            start: Instant::now(),
            phases: Vec::new(),
            current: None,
        }
    }

    /// Begin timing `name`, closing any phase still open.
    pub fn start_phase(&mut self, name: &'static str) {
        self.stop_phase();
        self.current = Some((name, Instant::now()));
    }

    /// Close the open phase, if any.
    pub fn stop_phase(&mut self) {
        if let Some((name, started)) = self.current.take() {
            self.phases.push(PhaseTiming {
                name: name.to_string(),
                elapsed_ns: started.elapsed().as_nanos() as u64,
            });
        }
    }

    /// Phases closed so far.
    pub fn phases(&self) -> &[PhaseTiming] {
        &self.phases
    }

    /// Close the open phase and produce the record.
    pub fn finish(mut self) -> ProfileRecord {
        self.stop_phase();
        ProfileRecord {
            sequence: 0,
            query: self.query,
            started_at: self.started_at,
            total_ns: self.start.elapsed().as_nanos() as u64,
            phases: self.phases,
        }
    }
}

/// Bounded, ordered history of profile records.
#[derive(Debug, Default)]
pub struct ProfileHistory {
    records: VecDeque<Arc<ProfileRecord>>,
    next_sequence: u64,
}

impl ProfileHistory {
    /// Empty history; the first record gets sequence 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record`, then evict oldest-first until at most `capacity`
    /// records remain. Returns the sequence number assigned to `record`.
    pub fn push(&mut self, mut record: ProfileRecord, capacity: usize) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        record.sequence = sequence;
        self.records.push_back(Arc::new(record));
        self.truncate(capacity);
        sequence
    }

    /// Evict oldest-first until at most `capacity` records remain.
    pub fn truncate(&mut self, capacity: usize) {
        while self.records.len() > capacity {
            self.records.pop_front();
        }
    }

    /// Record with the given sequence number, if still retained.
    pub fn get(&self, sequence: u64) -> Option<Arc<ProfileRecord>> {
        let first = self.records.front()?.sequence;
        let offset = sequence.checked_sub(first)?;
        self.records.get(usize::try_from(offset).ok()?).cloned()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are retained.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sequence numbers currently retained, oldest first.
    pub fn sequences(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.sequence).collect()
    }

    /// Sequence number the next record will receive.
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }
}
