//! Use case for browsing the public catalog.

use std::sync::Arc;

use tracing::{info_span, Instrument};

use pd_core::catalog::{CatalogFilter, CatalogPokemon};
use pd_core::ports::{CatalogGatewayPort, GatewayError};

use crate::roster::RosterManager;

/// Fetches a catalog page and re-derives each entry's membership flags from
/// the local registry.
///
/// The server computes `favorito`/`equipe` from its own state at response
/// time; a response racing a local mutation would roll a card's badge
/// backwards if those flags were trusted, so local membership wins.
pub struct BrowseCatalog {
    gateway: Arc<dyn CatalogGatewayPort>,
    roster: RosterManager,
}

impl BrowseCatalog {
    pub fn new(gateway: Arc<dyn CatalogGatewayPort>, roster: RosterManager) -> Self {
        Self { gateway, roster }
    }

    pub async fn execute(
        &self,
        filter: &CatalogFilter,
    ) -> Result<Vec<CatalogPokemon>, GatewayError> {
        let span = info_span!("usecase.browse_catalog.execute");

        async {
            let mut entries = self.gateway.browse_catalog(filter).await?;

            for entry in &mut entries {
                let code = entry.membership_code();
                entry.in_team = self.roster.is_in_team(&code);
                entry.favorite = self.roster.is_in_favorites(&code);
            }
            Ok(entries)
        }
        .instrument(span)
        .await
    }
}
