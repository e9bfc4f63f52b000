//! The command operator.
//!
//! [`PhysicalCommand`] runs one administrative [`Command`] against the
//! session and server state reachable from a [`QueryContext`]. It follows the
//! same [`PhysicalOperator`] contract as data-processing operators so a
//! pipeline driver can schedule it without special cases.

use std::sync::Arc;

use tracing::{debug, error};
use vela_storage::{FileSystem, LocalFileSystem};

use crate::context::QueryContext;
use crate::error::unrecoverable;
use crate::handlers::{export, set};
use crate::operator::{CompletionGuard, OperatorState, PhysicalOperator};
use crate::{Command, Result};

/// Operator executing a single administrative command.
pub struct PhysicalCommand {
    command: Command,
    file_system: Arc<dyn FileSystem>,
}

impl PhysicalCommand {
    /// Operator for `command`, exporting through the local file system.
    pub fn new(command: Command) -> Self {
        Self::with_file_system(command, Arc::new(LocalFileSystem))
    }

    /// Operator for `command`, exporting through `file_system`.
    pub fn with_file_system(command: Command, file_system: Arc<dyn FileSystem>) -> Self {
        Self {
            command,
            file_system,
        }
    }

    /// The command this operator runs.
    pub fn command(&self) -> &Command {
        &self.command
    }

    fn dispatch(&self, ctx: &mut QueryContext<'_>) -> Result<()> {
        match &self.command {
            Command::Use { db_name } => {
                ctx.set_current_schema(db_name.as_str());
                Ok(())
            }
            Command::Set { scope, name, value } => {
                set::set_variable(ctx.current_session_mut(), *scope, name, value)
            }
            Command::Export {
                file_no,
                file_name,
            } => export::export_profile(
                ctx.current_session(),
                self.file_system.as_ref(),
                *file_no,
                file_name,
            ),
            Command::CheckTable { .. } => Ok(()),
            Command::LockTable { .. } | Command::UnlockTable { .. } | Command::Cleanup => {
                unrecoverable(format!("Invalid command type: {}", self.command.name()))
            }
        }
    }
}

impl PhysicalOperator for PhysicalCommand {
    fn name(&self) -> &'static str {
        "Command"
    }

    fn init(&mut self) {}

    fn execute(&mut self, ctx: &mut QueryContext<'_>, state: &OperatorState) -> Result<bool> {
        let _guard = CompletionGuard::new(state);
        debug!(target: "vela::executor", command = %self.command, "Executing command");

        if let Err(e) = self.dispatch(ctx) {
            error!(target: "vela::executor", command = %self.command, error = %e, "Command failed");
            return Err(e);
        }
        Ok(true)
    }

    fn tasklet_count(&self) -> usize {
        unrecoverable("Not implement: TaskletCount not Implement")
    }
}
