//! Execution context handed to operators.

use std::sync::Arc;

use vela_engine::{Database, Session};

/// What an operator can see and change while it runs.
///
/// The context borrows the connection's [`Session`] mutably for the length of
/// one command; shared server state is reached through the session's
/// [`Database`] handle.
#[derive(Debug)]
pub struct QueryContext<'a> {
    session: &'a mut Session,
}

impl<'a> QueryContext<'a> {
    /// Context over `session`.
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// The session running the command.
    pub fn current_session(&self) -> &Session {
        self.session
    }

    /// Mutable access to the session running the command.
    pub fn current_session_mut(&mut self) -> &mut Session {
        self.session
    }

    /// Server state shared by every session.
    pub fn database(&self) -> &Arc<Database> {
        self.session.database()
    }

    /// Active schema name.
    pub fn current_schema(&self) -> &str {
        self.session.current_database()
    }

    /// Switch the active schema.
    pub fn set_current_schema(&mut self, name: impl Into<String>) {
        self.session.set_current_database(name);
    }
}
