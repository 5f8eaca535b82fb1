//! Shared mock ports for use-case tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use pd_core::catalog::{CatalogFilter, CatalogPokemon, NewOwnedPokemon, OwnedPokemon};
use pd_core::ids::PokemonCode;
use pd_core::ports::{CatalogGatewayPort, GatewayError, RosterStorePort};
use pd_core::roster::RosterSnapshot;

use crate::roster::RosterManager;

/// Volatile store; enough for use cases, which never reach the filesystem.
pub(crate) struct InMemoryRosterStore {
    stored: Mutex<RosterSnapshot>,
}

impl InMemoryRosterStore {
    pub(crate) fn new() -> Self {
        Self {
            stored: Mutex::new(RosterSnapshot::default()),
        }
    }
}

impl RosterStorePort for InMemoryRosterStore {
    fn load(&self) -> anyhow::Result<RosterSnapshot> {
        Ok(self.stored.lock().clone())
    }

    fn save(&self, snapshot: &RosterSnapshot) -> anyhow::Result<()> {
        *self.stored.lock() = snapshot.clone();
        Ok(())
    }
}

pub(crate) fn fresh_manager() -> RosterManager {
    RosterManager::new(Arc::new(InMemoryRosterStore::new()))
}

/// Scriptable gateway: canned responses, recorded mutation arguments, and an
/// optional error injected into every call.
#[derive(Default)]
pub(crate) struct MockCatalogGateway {
    pub team: Mutex<Vec<OwnedPokemon>>,
    pub favorites: Mutex<Vec<OwnedPokemon>>,
    pub catalog: Mutex<Vec<CatalogPokemon>>,
    pub fail_with: Mutex<Option<GatewayError>>,

    pub added_team: Mutex<Vec<NewOwnedPokemon>>,
    pub removed_team: Mutex<Vec<PokemonCode>>,
    pub added_favorites: Mutex<Vec<NewOwnedPokemon>>,
    pub removed_favorites: Mutex<Vec<PokemonCode>>,

    pub fetch_team_calls: AtomicUsize,
    pub fetch_favorites_calls: AtomicUsize,
    pub browse_calls: AtomicUsize,
}

impl MockCatalogGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing(error: GatewayError) -> Self {
        let gateway = Self::default();
        *gateway.fail_with.lock() = Some(error);
        gateway
    }

    fn injected_failure(&self) -> Result<(), GatewayError> {
        match &*self.fail_with.lock() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogGatewayPort for MockCatalogGateway {
    async fn fetch_team(&self) -> Result<Vec<OwnedPokemon>, GatewayError> {
        self.fetch_team_calls.fetch_add(1, Ordering::SeqCst);
        self.injected_failure()?;
        Ok(self.team.lock().clone())
    }

    async fn fetch_favorites(&self) -> Result<Vec<OwnedPokemon>, GatewayError> {
        self.fetch_favorites_calls.fetch_add(1, Ordering::SeqCst);
        self.injected_failure()?;
        Ok(self.favorites.lock().clone())
    }

    async fn add_team_member(&self, member: &NewOwnedPokemon) -> Result<(), GatewayError> {
        self.injected_failure()?;
        self.added_team.lock().push(member.clone());
        Ok(())
    }

    async fn remove_team_member(&self, code: &PokemonCode) -> Result<(), GatewayError> {
        self.injected_failure()?;
        self.removed_team.lock().push(code.clone());
        Ok(())
    }

    async fn add_favorite(&self, member: &NewOwnedPokemon) -> Result<(), GatewayError> {
        self.injected_failure()?;
        self.added_favorites.lock().push(member.clone());
        Ok(())
    }

    async fn remove_favorite(&self, code: &PokemonCode) -> Result<(), GatewayError> {
        self.injected_failure()?;
        self.removed_favorites.lock().push(code.clone());
        Ok(())
    }

    async fn browse_catalog(
        &self,
        _filter: &CatalogFilter,
    ) -> Result<Vec<CatalogPokemon>, GatewayError> {
        self.browse_calls.fetch_add(1, Ordering::SeqCst);
        self.injected_failure()?;
        Ok(self.catalog.lock().clone())
    }
}

pub(crate) fn owned(code: &str, name: &str) -> OwnedPokemon {
    OwnedPokemon {
        code: code.to_string(),
        name: name.to_string(),
        ..Default::default()
    }
}
