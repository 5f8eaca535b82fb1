//! Use case for unmarking a favorite.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use pd_core::ids::PokemonCode;
use pd_core::ports::{CatalogGatewayPort, GatewayError};

use crate::roster::RosterManager;

/// Removes a favorite on the server, then locally.
pub struct RemoveFavorite {
    gateway: Arc<dyn CatalogGatewayPort>,
    roster: RosterManager,
}

impl RemoveFavorite {
    pub fn new(gateway: Arc<dyn CatalogGatewayPort>, roster: RosterManager) -> Self {
        Self { gateway, roster }
    }

    pub async fn execute(&self, code: &PokemonCode) -> Result<(), GatewayError> {
        let span = info_span!("usecase.remove_favorite.execute", code = %code);

        async {
            self.gateway.remove_favorite(code).await?;

            let was_present = self.roster.remove_from_favorites(code);
            info!(was_present, "favorite removed");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
