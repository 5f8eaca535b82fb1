use std::collections::BTreeSet;

use crate::ids::PokemonCode;

use super::snapshot::RosterSnapshot;
use super::team::{Team, TeamInsert};

/// The user's full membership state: the capped battle team plus the
/// unbounded favorites list.
///
/// Pure state, no I/O. Persistence and broadcasting sit above this type and
/// drive it through the mutators below.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    team: Team,
    favorites: BTreeSet<PokemonCode>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild state from a persisted snapshot.
    pub fn from_snapshot(snapshot: RosterSnapshot) -> Self {
        let mut roster = Self::new();
        roster.replace(
            snapshot.team.into_iter().collect(),
            snapshot.favorites.into_iter().collect(),
        );
        roster
    }

    /// Capture the current state for persistence.
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            team: self.team.members().iter().cloned().collect(),
            favorites: self.favorites.iter().cloned().collect(),
        }
    }

    pub fn add_to_team(&mut self, code: PokemonCode) -> TeamInsert {
        self.team.insert(code)
    }

    pub fn remove_from_team(&mut self, code: &PokemonCode) -> bool {
        self.team.remove(code)
    }

    /// Add to favorites. Returns whether the set changed.
    pub fn add_to_favorites(&mut self, code: PokemonCode) -> bool {
        self.favorites.insert(code)
    }

    /// Remove from favorites. Idempotent; returns whether the member was present.
    pub fn remove_from_favorites(&mut self, code: &PokemonCode) -> bool {
        self.favorites.remove(code)
    }

    pub fn clear_team(&mut self) {
        self.team.clear();
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
    }

    /// Replace both collections wholesale, as reconciliation does.
    pub fn replace(&mut self, team: BTreeSet<PokemonCode>, favorites: BTreeSet<PokemonCode>) {
        self.team.replace(team);
        self.favorites = favorites;
    }

    pub fn is_in_team(&self, code: &PokemonCode) -> bool {
        self.team.contains(code)
    }

    pub fn is_in_favorites(&self, code: &PokemonCode) -> bool {
        self.favorites.contains(code)
    }

    pub fn team_len(&self) -> usize {
        self.team.len()
    }

    pub fn team_is_full(&self) -> bool {
        self.team.is_full()
    }

    pub fn favorites_len(&self) -> usize {
        self.favorites.len()
    }

    pub fn team_members(&self) -> &BTreeSet<PokemonCode> {
        self.team.members()
    }

    pub fn favorites(&self) -> &BTreeSet<PokemonCode> {
        &self.favorites
    }
}
