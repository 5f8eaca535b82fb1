//! Use case for clearing membership state at logout.

use tracing::{info, info_span};

use crate::roster::RosterManager;

/// Empties both collections. Purely local; observers of each stream receive
/// the empty set, and the persisted snapshot is wiped alongside.
pub struct ResetSession {
    roster: RosterManager,
}

impl ResetSession {
    pub fn new(roster: RosterManager) -> Self {
        Self { roster }
    }

    pub fn execute(&self) {
        let span = info_span!("usecase.reset_session.execute");
        let _guard = span.enter();

        self.roster.clear_team();
        self.roster.clear_favorites();
        info!("membership state cleared");
    }
}
