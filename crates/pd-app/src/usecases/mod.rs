//! Caller-facing operations, one struct per user intent.
//!
//! Views talk to these, never to the gateway or the registry internals
//! directly. Each use case owns exactly the ports it needs.

pub mod add_favorite;
pub mod add_team_member;
pub mod browse_catalog;
pub mod refresh_roster;
pub mod remove_favorite;
pub mod remove_team_member;
pub mod reset_session;

#[cfg(test)]
pub(crate) mod test_support;

pub use add_favorite::AddFavorite;
pub use add_team_member::{AddTeamMember, AddTeamMemberError};
pub use browse_catalog::BrowseCatalog;
pub use refresh_roster::RefreshRoster;
pub use remove_favorite::RemoveFavorite;
pub use remove_team_member::RemoveTeamMember;
pub use reset_session::ResetSession;
