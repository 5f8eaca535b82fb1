//! Use case for marking a member as a favorite.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use pd_core::catalog::NewOwnedPokemon;
use pd_core::ports::{CatalogGatewayPort, GatewayError};

use crate::roster::RosterManager;

/// Adds a favorite on the server, then locally. Favorites are unbounded, so
/// there is no capacity concern on either side.
pub struct AddFavorite {
    gateway: Arc<dyn CatalogGatewayPort>,
    roster: RosterManager,
}

impl AddFavorite {
    pub fn new(gateway: Arc<dyn CatalogGatewayPort>, roster: RosterManager) -> Self {
        Self { gateway, roster }
    }

    pub async fn execute(&self, member: NewOwnedPokemon) -> Result<(), GatewayError> {
        let span = info_span!("usecase.add_favorite.execute", code = %member.code);

        async {
            self.gateway.add_favorite(&member).await?;

            let changed = self.roster.add_to_favorites(member.membership_code());
            info!(changed, "favorite added");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
