//! Application assembly.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use pd_app::usecases::{
    AddFavorite, AddTeamMember, BrowseCatalog, RefreshRoster, RemoveFavorite, RemoveTeamMember,
    ResetSession,
};
use pd_app::RosterManager;
use pd_core::config::AppConfig;
use pd_core::ports::{CatalogGatewayPort, RosterStorePort};
use pd_infra::{FileRosterStore, HttpCatalogGateway};

/// The assembled engine: one membership registry plus the use cases
/// around it.
///
/// [`App::new`] wires the default adapters from configuration; tests and
/// embedders with their own adapters go through [`App::with_ports`]. Use
/// cases are built per call and borrow nothing, so callers may hold them
/// across awaits or spawn them freely.
pub struct App {
    gateway: Arc<dyn CatalogGatewayPort>,
    roster: RosterManager,
}

impl App {
    /// Wire the file store and HTTP gateway described by `config`.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let snapshot_path = match &config.storage.data_dir {
            Some(dir) => dir.join("roster.json"),
            None => pd_infra::fs::default_snapshot_path()?,
        };
        info!(path = %snapshot_path.display(), "opening roster store");

        let store = Arc::new(FileRosterStore::new(snapshot_path));
        let gateway = Arc::new(HttpCatalogGateway::new(&config.api)?);
        Ok(Self::with_ports(store, gateway))
    }

    /// Wire the engine over caller-provided adapters.
    ///
    /// The registry loads its snapshot from `store` here, before any
    /// subscription can be taken.
    pub fn with_ports(
        store: Arc<dyn RosterStorePort>,
        gateway: Arc<dyn CatalogGatewayPort>,
    ) -> Self {
        let roster = RosterManager::new(store);
        Self { gateway, roster }
    }

    /// The membership registry: reads, subscriptions, local mutation.
    pub fn roster(&self) -> &RosterManager {
        &self.roster
    }

    pub fn add_team_member(&self) -> AddTeamMember {
        AddTeamMember::new(self.gateway.clone(), self.roster.clone())
    }

    pub fn remove_team_member(&self) -> RemoveTeamMember {
        RemoveTeamMember::new(self.gateway.clone(), self.roster.clone())
    }

    pub fn add_favorite(&self) -> AddFavorite {
        AddFavorite::new(self.gateway.clone(), self.roster.clone())
    }

    pub fn remove_favorite(&self) -> RemoveFavorite {
        RemoveFavorite::new(self.gateway.clone(), self.roster.clone())
    }

    /// Reconcile both collections against the server.
    pub fn refresh_roster(&self) -> RefreshRoster {
        RefreshRoster::new(self.gateway.clone(), self.roster.clone())
    }

    pub fn browse_catalog(&self) -> BrowseCatalog {
        BrowseCatalog::new(self.gateway.clone(), self.roster.clone())
    }

    pub fn reset_session(&self) -> ResetSession {
        ResetSession::new(self.roster.clone())
    }
}
