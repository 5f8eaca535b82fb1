//! Use case for reconciling local membership with the server.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use pd_core::ports::{CatalogGatewayPort, GatewayError};

use crate::roster::RosterManager;

/// Fetches the authoritative team and favorites collections and replaces
/// local state with them.
///
/// Both fetches run concurrently and both must succeed before any local
/// state changes; a failure of either leaves the registry untouched.
/// Partial reconciliation (team only, favorites only) is never exposed.
///
/// Overlapping executions are permitted: whichever reconciliation applies
/// last determines final state. See the roster flow tests for the
/// demonstration of that race.
pub struct RefreshRoster {
    gateway: Arc<dyn CatalogGatewayPort>,
    roster: RosterManager,
}

impl RefreshRoster {
    pub fn new(gateway: Arc<dyn CatalogGatewayPort>, roster: RosterManager) -> Self {
        Self { gateway, roster }
    }

    pub async fn execute(&self) -> Result<(), GatewayError> {
        let span = info_span!("usecase.refresh_roster.execute");

        async {
            let (team, favorites) =
                futures::try_join!(self.gateway.fetch_team(), self.gateway.fetch_favorites())?;

            info!(
                team = team.len(),
                favorites = favorites.len(),
                "fetched authoritative roster"
            );
            self.roster.sync_with_server(&team, &favorites);
            Ok(())
        }
        .instrument(span)
        .await
    }
}
