//! Membership domain: the user's curated collections.
//!
//! A roster is the pair of sets a user builds while browsing the catalog:
//! the battle team (bounded) and the favorites list (unbounded). All
//! invariant enforcement lives here; persistence and notification are
//! layered on top by the application crate.

pub mod domain;
pub mod snapshot;
pub mod team;

pub use domain::Roster;
pub use snapshot::RosterSnapshot;
pub use team::{Team, TeamInsert, TEAM_CAPACITY};
