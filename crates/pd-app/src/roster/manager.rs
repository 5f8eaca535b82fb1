//! The membership registry: canonical team and favorites state.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use pd_core::catalog::OwnedPokemon;
use pd_core::ids::PokemonCode;
use pd_core::ports::RosterStorePort;
use pd_core::roster::{Roster, RosterSnapshot, TeamInsert};

use crate::broadcast::{StateSubject, Subscription};

/// Which change streams a mutation publishes to.
#[derive(Clone, Copy)]
enum Publish {
    Team,
    Favorites,
    Both,
}

/// The membership registry.
///
/// Owns the canonical in-memory team and favorites sets. Cheap to clone;
/// clones share one underlying registry. Constructed explicitly and handed
/// to every consumer, never reached through globals.
///
/// Every mutation runs under one write lock as mutate, then persist, then
/// broadcast. Persist strictly precedes broadcast, so an observer reacting
/// to a notification by reading persisted state never observes staleness;
/// the write lock keeps broadcasts in exact mutation order with no
/// coalescing.
#[derive(Clone)]
pub struct RosterManager {
    inner: Arc<ManagerInner>,
}

struct ManagerInner {
    store: Arc<dyn RosterStorePort>,
    roster: Mutex<Roster>,
    team_subject: StateSubject<BTreeSet<PokemonCode>>,
    favorites_subject: StateSubject<BTreeSet<PokemonCode>>,
    write_lock: Mutex<()>,
}

impl RosterManager {
    /// Build the registry from whatever the store remembers.
    ///
    /// Loading is fail-open: a missing or unreadable snapshot degrades to
    /// the empty roster and never fails construction.
    pub fn new(store: Arc<dyn RosterStorePort>) -> Self {
        let snapshot = match store.load() {
            Ok(snapshot) => snapshot,
            Err(error) => {
                warn!(%error, "failed to load roster snapshot, starting empty");
                RosterSnapshot::default()
            }
        };
        let roster = Roster::from_snapshot(snapshot);

        info!(
            team = roster.team_len(),
            favorites = roster.favorites_len(),
            "roster loaded"
        );

        let team_subject = StateSubject::new(roster.team_members().clone());
        let favorites_subject = StateSubject::new(roster.favorites().clone());

        Self {
            inner: Arc::new(ManagerInner {
                store,
                roster: Mutex::new(roster),
                team_subject,
                favorites_subject,
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Attempt to add a member to the team.
    ///
    /// The outcome carries the capacity signal; there is nothing to
    /// pre-check at call sites. The current team set is persisted and
    /// broadcast even when the insert was rejected, so views re-derive
    /// their state from the same notification path either way.
    pub fn add_to_team(&self, code: PokemonCode) -> TeamInsert {
        self.mutate(Publish::Team, |roster| roster.add_to_team(code))
    }

    /// Remove a team member. Idempotent; returns whether it was present.
    pub fn remove_from_team(&self, code: &PokemonCode) -> bool {
        self.mutate(Publish::Team, |roster| roster.remove_from_team(code))
    }

    /// Add a favorite. Returns whether the set changed.
    pub fn add_to_favorites(&self, code: PokemonCode) -> bool {
        self.mutate(Publish::Favorites, |roster| roster.add_to_favorites(code))
    }

    /// Remove a favorite. Idempotent; returns whether it was present.
    pub fn remove_from_favorites(&self, code: &PokemonCode) -> bool {
        self.mutate(Publish::Favorites, |roster| {
            roster.remove_from_favorites(code)
        })
    }

    pub fn clear_team(&self) {
        self.mutate(Publish::Team, |roster| roster.clear_team());
    }

    pub fn clear_favorites(&self) {
        self.mutate(Publish::Favorites, |roster| roster.clear_favorites());
    }

    /// Replace both sets with the authoritative server contents.
    ///
    /// Full-snapshot replacement, not a merge. Entries without a usable key
    /// are skipped. Safe to call repeatedly and at any time; when two
    /// reconciliations overlap, whichever applies last wins.
    pub fn sync_with_server(&self, team: &[OwnedPokemon], favorites: &[OwnedPokemon]) {
        let team_keys: BTreeSet<PokemonCode> = team
            .iter()
            .filter_map(|entry| entry.membership_code())
            .collect();
        let favorite_keys: BTreeSet<PokemonCode> = favorites
            .iter()
            .filter_map(|entry| entry.membership_code())
            .collect();

        debug!(
            team = team_keys.len(),
            favorites = favorite_keys.len(),
            "reconciling roster with server"
        );

        self.mutate(Publish::Both, |roster| {
            roster.replace(team_keys, favorite_keys)
        });
    }

    pub fn is_in_team(&self, code: &PokemonCode) -> bool {
        self.inner.roster.lock().is_in_team(code)
    }

    pub fn is_in_favorites(&self, code: &PokemonCode) -> bool {
        self.inner.roster.lock().is_in_favorites(code)
    }

    pub fn team_count(&self) -> usize {
        self.inner.roster.lock().team_len()
    }

    pub fn favorites_count(&self) -> usize {
        self.inner.roster.lock().favorites_len()
    }

    /// Copy of the current team set.
    pub fn team(&self) -> BTreeSet<PokemonCode> {
        self.inner.roster.lock().team_members().clone()
    }

    /// Copy of the current favorites set.
    pub fn favorites(&self) -> BTreeSet<PokemonCode> {
        self.inner.roster.lock().favorites().clone()
    }

    /// Register a team observer. It receives the current set synchronously
    /// before this returns, then every subsequent change until the guard is
    /// dropped.
    ///
    /// Callbacks run on the mutating thread while the registry's write lock
    /// is held: they must not call back into mutating operations. Reading
    /// the delivered set or the registry's predicates is fine.
    pub fn subscribe_team(
        &self,
        callback: impl Fn(&BTreeSet<PokemonCode>) + Send + Sync + 'static,
    ) -> Subscription {
        // Registration under the write lock keeps the replay ordered
        // against concurrent broadcasts.
        let _guard = self.inner.write_lock.lock();
        self.inner.team_subject.subscribe(callback)
    }

    /// Register a favorites observer. Same contract as [`subscribe_team`].
    ///
    /// [`subscribe_team`]: Self::subscribe_team
    pub fn subscribe_favorites(
        &self,
        callback: impl Fn(&BTreeSet<PokemonCode>) + Send + Sync + 'static,
    ) -> Subscription {
        let _guard = self.inner.write_lock.lock();
        self.inner.favorites_subject.subscribe(callback)
    }

    /// Run `apply` on the roster, persist the resulting snapshot, then
    /// broadcast the named streams, all under the write lock.
    ///
    /// A persist failure is logged and does not suppress the broadcast:
    /// observers track the in-memory truth, and the next successful save
    /// repairs the file.
    fn mutate<R>(&self, publish: Publish, apply: impl FnOnce(&mut Roster) -> R) -> R {
        let inner = &self.inner;
        let _guard = inner.write_lock.lock();

        let (result, team, favorites, snapshot) = {
            let mut roster = inner.roster.lock();
            let result = apply(&mut roster);
            (
                result,
                roster.team_members().clone(),
                roster.favorites().clone(),
                roster.snapshot(),
            )
        };

        if let Err(error) = inner.store.save(&snapshot) {
            error!(%error, "failed to persist roster snapshot");
        }

        match publish {
            Publish::Team => inner.team_subject.publish(team),
            Publish::Favorites => inner.favorites_subject.publish(favorites),
            Publish::Both => {
                inner.team_subject.publish(team);
                inner.favorites_subject.publish(favorites);
            }
        }

        result
    }
}
