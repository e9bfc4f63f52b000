//! The Executor - single entry point for administrative commands.

use std::sync::Arc;

use vela_engine::{Database, QueryProfiler, Session};
use vela_storage::{FileSystem, LocalFileSystem};

use crate::context::QueryContext;
use crate::operator::{OperatorState, PhysicalOperator};
use crate::physical_command::PhysicalCommand;
use crate::{Command, Result};

/// The command executor.
///
/// The Executor is **stateless**: it holds a handle to the server state but
/// keeps nothing of its own between commands. Per-connection state lives in
/// [`Session`], shared state in [`Database`].
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads; each thread
/// drives its own sessions.
///
/// # Example
///
/// ```ignore
/// use vela_executor::{Command, Executor};
/// use vela_engine::Database;
///
/// let executor = Executor::new(Database::ephemeral());
/// let mut session = executor.open_session();
///
/// executor.execute(&mut session, Command::Use { db_name: "sales".into() })?;
/// ```
pub struct Executor {
    db: Arc<Database>,
    file_system: Arc<dyn FileSystem>,
}

impl Executor {
    /// Executor over `db`, exporting to the local file system.
    pub fn new(db: Arc<Database>) -> Self {
        Self::with_file_system(db, Arc::new(LocalFileSystem))
    }

    /// Executor over `db`, exporting through `file_system`.
    pub fn with_file_system(db: Arc<Database>, file_system: Arc<dyn FileSystem>) -> Self {
        Self { db, file_system }
    }

    /// Server state this executor runs against.
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// Open a new session on the server.
    pub fn open_session(&self) -> Session {
        self.db.new_session()
    }

    /// Execute a single command in `session`.
    ///
    /// The query is counted whatever the outcome. When the session has
    /// profiling on, a profile record is stored after a successful run.
    pub fn execute(&self, session: &mut Session, cmd: Command) -> Result<()> {
        let mut profiler = session
            .profile_enabled()
            .then(|| QueryProfiler::new(cmd.to_string()));
        let mut op = PhysicalCommand::with_file_system(cmd, self.file_system.clone());

        if let Some(p) = profiler.as_mut() {
            p.start_phase("init");
        }
        op.init();
        if let Some(p) = profiler.as_mut() {
            p.stop_phase();
            p.start_phase("execute");
        }

        let state = OperatorState::new();
        let result = op.execute(&mut QueryContext::new(session), &state);
        debug_assert!(state.is_complete());

        if let Some(p) = profiler.as_mut() {
            p.stop_phase();
        }
        session.record_query();
        result?;

        if let Some(p) = profiler {
            session.store_profile_record(p.finish());
        }
        Ok(())
    }
}
