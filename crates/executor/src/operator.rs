//! Operator state machine shared by every physical operator.
//!
//! A pipeline driver treats all operators the same way: call `init` once,
//! call `execute`, then observe the [`OperatorState`] until it reports
//! completion. States only move forward:
//!
//! ```text
//! Pending -> Running -> Completed
//! ```
//!
//! An operator takes a [`CompletionGuard`] at the top of `execute`. The guard
//! completes the state when it drops, which covers normal returns, early
//! `?` returns and panics unwinding out of the operator alike.

use std::sync::atomic::{AtomicU8, Ordering};

use crate::context::QueryContext;
use crate::Result;

/// Lifecycle position of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OperatorStatus {
    /// Not yet executed
    Pending = 0,
    /// Inside `execute`
    Running = 1,
    /// `execute` has returned (successfully or not)
    Completed = 2,
}

impl OperatorStatus {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => OperatorStatus::Pending,
            1 => OperatorStatus::Running,
            _ => OperatorStatus::Completed,
        }
    }
}

/// Completion flag observed by the pipeline driver, possibly from another
/// thread.
#[derive(Debug)]
pub struct OperatorState {
    status: AtomicU8,
}

impl OperatorState {
    /// Fresh state in `Pending`.
    pub fn new() -> Self {
        Self {
            status: AtomicU8::new(OperatorStatus::Pending as u8),
        }
    }

    /// Current status.
    pub fn status(&self) -> OperatorStatus {
        OperatorStatus::from_u8(self.status.load(Ordering::Acquire))
    }

    /// Whether the operator has finished.
    pub fn is_complete(&self) -> bool {
        self.status() == OperatorStatus::Completed
    }

    /// Move `Pending` to `Running`. No effect in any other status.
    pub fn set_running(&self) {
        let _ = self.status.compare_exchange(
            OperatorStatus::Pending as u8,
            OperatorStatus::Running as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Mark the operator complete. Returns `false` if it already was.
    pub fn set_complete(&self) -> bool {
        self.status
            .swap(OperatorStatus::Completed as u8, Ordering::AcqRel)
            != OperatorStatus::Completed as u8
    }
}

impl Default for OperatorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Completes an [`OperatorState`] when dropped.
#[must_use = "the state completes as soon as the guard is dropped"]
pub struct CompletionGuard<'a> {
    state: &'a OperatorState,
}

impl<'a> CompletionGuard<'a> {
    /// Mark `state` running and arm the guard.
    pub fn new(state: &'a OperatorState) -> Self {
        state.set_running();
        Self { state }
    }
}

impl Drop for CompletionGuard<'_> {
    fn drop(&mut self) {
        self.state.set_complete();
    }
}

/// The contract every schedulable operator implements.
pub trait PhysicalOperator {
    /// Operator name for logs and plans.
    fn name(&self) -> &'static str;

    /// One-time setup before `execute`.
    fn init(&mut self);

    /// Perform the whole unit of work synchronously. `state` is complete when
    /// this returns, whatever the outcome.
    fn execute(&mut self, ctx: &mut QueryContext<'_>, state: &OperatorState) -> Result<bool>;

    /// How many parallel tasklets the operator can be split into.
    fn tasklet_count(&self) -> usize;
}
