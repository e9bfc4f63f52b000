//! Global catalog state
//!
//! Only the slice of the catalog the command layer touches lives here: the
//! profile-history capacity every session consults when it stores a record.

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::info;

/// Process-wide catalog state shared by all sessions.
#[derive(Debug)]
pub struct Catalog {
    profile_history_capacity: AtomicUsize,
}

impl Catalog {
    /// Catalog with the given initial profile-history capacity.
    pub fn new(profile_history_capacity: usize) -> Self {
        Self {
            profile_history_capacity: AtomicUsize::new(profile_history_capacity),
        }
    }

    /// Current profile-history capacity.
    pub fn profile_history_capacity(&self) -> usize {
        self.profile_history_capacity.load(Ordering::Acquire)
    }

    /// Change the profile-history capacity. Sessions apply the new bound the
    /// next time they store a record.
    pub fn resize_profile_history(&self, capacity: usize) {
        let previous = self
            .profile_history_capacity
            .swap(capacity, Ordering::AcqRel);
        info!(
            target: "vela::catalog",
            previous,
            capacity,
            "Profile history resized"
        );
    }
}
