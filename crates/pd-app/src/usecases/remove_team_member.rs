//! Use case for removing a member from the battle team.

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use pd_core::ids::PokemonCode;
use pd_core::ports::{CatalogGatewayPort, GatewayError};

use crate::roster::RosterManager;

/// Removes a member from the team on the server, then locally.
///
/// The local remove only runs when the server accepted the delete; a
/// `NotFound` is surfaced to the caller, and reconciliation, not this path,
/// repairs any divergence it reveals.
pub struct RemoveTeamMember {
    gateway: Arc<dyn CatalogGatewayPort>,
    roster: RosterManager,
}

impl RemoveTeamMember {
    pub fn new(gateway: Arc<dyn CatalogGatewayPort>, roster: RosterManager) -> Self {
        Self { gateway, roster }
    }

    pub async fn execute(&self, code: &PokemonCode) -> Result<(), GatewayError> {
        let span = info_span!("usecase.remove_team_member.execute", code = %code);

        async {
            self.gateway.remove_team_member(code).await?;

            let was_present = self.roster.remove_from_team(code);
            info!(was_present, "team member removed");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
