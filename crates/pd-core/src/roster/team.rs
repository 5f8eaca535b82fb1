use std::collections::BTreeSet;

use crate::ids::PokemonCode;

/// Maximum number of members a battle team may hold.
pub const TEAM_CAPACITY: usize = 6;

/// Outcome of a team insertion attempt.
///
/// Capacity enforcement and its signal live in one place: callers that need
/// to surface a "team is full" message inspect the returned outcome instead
/// of re-checking the size around the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamInsert {
    /// The member was inserted.
    Added,

    /// The member was already present; no state change.
    AlreadyPresent,

    /// The team is at capacity; no state change.
    Full,
}

impl TeamInsert {
    /// Whether the insertion changed the team.
    pub fn is_added(self) -> bool {
        self == Self::Added
    }

    /// Whether the insertion was rejected for capacity.
    pub fn is_full(self) -> bool {
        self == Self::Full
    }
}

/// The battle team: a set of at most [`TEAM_CAPACITY`] members.
///
/// The cardinality invariant `0 <= len <= TEAM_CAPACITY` holds across every
/// operation, including wholesale replacement during reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Team {
    members: BTreeSet<PokemonCode>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to insert a member.
    ///
    /// A member that is already present reports [`TeamInsert::AlreadyPresent`]
    /// even when the team is full: presence is the more useful fact for the
    /// caller, and either way nothing changed.
    pub fn insert(&mut self, code: PokemonCode) -> TeamInsert {
        if self.members.contains(&code) {
            return TeamInsert::AlreadyPresent;
        }
        if self.members.len() >= TEAM_CAPACITY {
            return TeamInsert::Full;
        }
        self.members.insert(code);
        TeamInsert::Added
    }

    /// Remove a member. Idempotent; returns whether the member was present.
    pub fn remove(&mut self, code: &PokemonCode) -> bool {
        self.members.remove(code)
    }

    pub fn contains(&self, code: &PokemonCode) -> bool {
        self.members.contains(code)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= TEAM_CAPACITY
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn members(&self) -> &BTreeSet<PokemonCode> {
        &self.members
    }

    /// Replace the whole team, keeping the capacity invariant.
    ///
    /// Reconciliation trusts the server not to hand out more than
    /// [`TEAM_CAPACITY`] members, but an overlong set is still truncated
    /// rather than allowed to break the invariant.
    pub fn replace(&mut self, members: BTreeSet<PokemonCode>) {
        if members.len() > TEAM_CAPACITY {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                received = members.len(),
                capacity = TEAM_CAPACITY,
                "server team exceeds capacity; truncating"
            );
            self.members = members.into_iter().take(TEAM_CAPACITY).collect();
        } else {
            self.members = members;
        }
    }
}
