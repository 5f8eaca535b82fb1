//! Roster flow integration tests.
//!
//! These exercise the registry over the real file store: persistence across
//! restarts, the capacity invariant end to end, reconciliation overwriting
//! local state, and the overlapping-refresh race.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tempfile::TempDir;
use tokio::sync::Notify;

use pd_app::usecases::RefreshRoster;
use pd_app::RosterManager;
use pd_core::catalog::{CatalogFilter, CatalogPokemon, NewOwnedPokemon, OwnedPokemon};
use pd_core::ids::PokemonCode;
use pd_core::ports::{CatalogGatewayPort, GatewayError, RosterStorePort};
use pd_core::roster::{TeamInsert, TEAM_CAPACITY};
use pd_infra::FileRosterStore;

fn code(s: &str) -> PokemonCode {
    PokemonCode::new(s)
}

fn owned(c: &str) -> OwnedPokemon {
    OwnedPokemon {
        code: c.to_string(),
        name: c.to_string(),
        ..Default::default()
    }
}

fn manager_in(dir: &TempDir) -> RosterManager {
    let store = FileRosterStore::new(dir.path().join("roster.json"));
    RosterManager::new(Arc::new(store))
}

#[test]
fn test_membership_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    {
        let manager = manager_in(&dir);
        manager.add_to_team(code("pikachu"));
        manager.add_to_team(code("charmander"));
        manager.add_to_favorites(code("eevee"));
    }

    let manager = manager_in(&dir);

    assert!(manager.is_in_team(&code("pikachu")));
    assert!(manager.is_in_team(&code("charmander")));
    assert!(manager.is_in_favorites(&code("eevee")));
    assert_eq!(manager.team_count(), 2);
    assert_eq!(manager.favorites_count(), 1);
}

#[test]
fn test_single_add_updates_count_and_predicate() {
    let dir = TempDir::new().unwrap();
    let manager = manager_in(&dir);

    let outcome = manager.add_to_team(code("pikachu"));

    assert_eq!(outcome, TeamInsert::Added);
    assert_eq!(manager.team_count(), 1);
    assert!(manager.is_in_team(&code("pikachu")));
}

#[test]
fn test_full_team_rejects_a_seventh_member() {
    let dir = TempDir::new().unwrap();
    let manager = manager_in(&dir);
    for i in 0..TEAM_CAPACITY {
        assert_eq!(
            manager.add_to_team(code(&format!("member-{i}"))),
            TeamInsert::Added
        );
    }

    let outcome = manager.add_to_team(code("mewtwo"));

    assert_eq!(outcome, TeamInsert::Full);
    assert_eq!(manager.team_count(), TEAM_CAPACITY);
    assert!(!manager.is_in_team(&code("mewtwo")));
}

#[test]
fn test_reconciliation_overwrites_local_state() {
    let dir = TempDir::new().unwrap();
    let manager = manager_in(&dir);
    manager.add_to_team(code("local-team-only"));
    manager.add_to_favorites(code("local-fav-only"));

    manager.sync_with_server(&[owned("bulbasaur")], &[owned("mewtwo")]);

    assert_eq!(manager.team(), [code("bulbasaur")].into_iter().collect());
    assert_eq!(manager.favorites(), [code("mewtwo")].into_iter().collect());

    // And the replacement is what a restart remembers.
    drop(manager);
    let manager = manager_in(&dir);
    assert!(manager.is_in_team(&code("bulbasaur")));
    assert!(!manager.is_in_team(&code("local-team-only")));
}

#[test]
fn test_corrupt_snapshot_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");
    std::fs::write(&path, "{{{ definitely not json").unwrap();

    let manager = RosterManager::new(Arc::new(FileRosterStore::new(path)));

    assert_eq!(manager.team_count(), 0);
    assert_eq!(manager.favorites_count(), 0);
}

#[test]
fn test_subscription_replays_the_current_set_before_any_mutation() {
    let dir = TempDir::new().unwrap();
    let manager = manager_in(&dir);
    manager.add_to_team(code("pikachu"));

    let seen: Arc<Mutex<Vec<BTreeSet<PokemonCode>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = manager.subscribe_team(move |set| sink.lock().push(set.clone()));

    // The current set arrived synchronously inside subscribe_team.
    assert_eq!(*seen.lock(), vec![[code("pikachu")].into_iter().collect()]);
}

#[test]
fn test_observer_reading_disk_sees_the_broadcast_state() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roster.json");
    let manager = RosterManager::new(Arc::new(FileRosterStore::new(path.clone())));

    let reader = FileRosterStore::new(path);
    let mismatches = Arc::new(Mutex::new(0usize));
    let counter = mismatches.clone();
    let _sub = manager.subscribe_team(move |set| {
        let persisted: BTreeSet<PokemonCode> =
            reader.load().unwrap().team.into_iter().collect();
        if persisted != *set {
            *counter.lock() += 1;
        }
    });

    manager.add_to_team(code("pikachu"));
    manager.add_to_team(code("charmander"));
    manager.remove_from_team(&code("pikachu"));

    assert_eq!(*mismatches.lock(), 0);
}

/// Gateway with fixed responses whose favorites fetch can be held open
/// until released, to pin down the reconciliation race deterministically.
struct ScriptedGateway {
    team: Vec<OwnedPokemon>,
    favorites: Vec<OwnedPokemon>,
    hold_favorites: Option<Arc<Notify>>,
}

impl ScriptedGateway {
    fn new(team: Vec<OwnedPokemon>, favorites: Vec<OwnedPokemon>) -> Self {
        Self {
            team,
            favorites,
            hold_favorites: None,
        }
    }
}

#[async_trait]
impl CatalogGatewayPort for ScriptedGateway {
    async fn fetch_team(&self) -> Result<Vec<OwnedPokemon>, GatewayError> {
        Ok(self.team.clone())
    }

    async fn fetch_favorites(&self) -> Result<Vec<OwnedPokemon>, GatewayError> {
        if let Some(gate) = &self.hold_favorites {
            gate.notified().await;
        }
        Ok(self.favorites.clone())
    }

    async fn add_team_member(&self, _member: &NewOwnedPokemon) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn remove_team_member(&self, _code: &PokemonCode) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn add_favorite(&self, _member: &NewOwnedPokemon) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn remove_favorite(&self, _code: &PokemonCode) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn browse_catalog(
        &self,
        _filter: &CatalogFilter,
    ) -> Result<Vec<CatalogPokemon>, GatewayError> {
        Ok(Vec::new())
    }
}

/// Two refreshes overlap and the one whose responses resolve *last*
/// determines final state, even when it was issued first. Accepted
/// nondeterminism, not a defect: nothing sequences reconciliations.
#[tokio::test]
async fn test_overlapping_refreshes_last_applied_wins() {
    let dir = TempDir::new().unwrap();
    let manager = manager_in(&dir);

    let gate = Arc::new(Notify::new());
    let mut slow = ScriptedGateway::new(vec![owned("bulbasaur")], vec![]);
    slow.hold_favorites = Some(gate.clone());
    let fast = ScriptedGateway::new(vec![owned("mewtwo")], vec![]);

    // Issued first, resolves last.
    let slow_refresh = RefreshRoster::new(Arc::new(slow), manager.clone());
    let slow_task = tokio::spawn(async move { slow_refresh.execute().await });
    tokio::task::yield_now().await;

    // Issued second, resolves and applies immediately.
    RefreshRoster::new(Arc::new(fast), manager.clone())
        .execute()
        .await
        .unwrap();
    assert!(manager.is_in_team(&code("mewtwo")));

    gate.notify_one();
    slow_task.await.unwrap().unwrap();

    // The stale first refresh overwrote the newer one.
    assert_eq!(manager.team(), [code("bulbasaur")].into_iter().collect());
}
