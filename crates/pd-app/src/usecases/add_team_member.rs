//! Use case for adding a member to the battle team.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span, Instrument};

use pd_core::catalog::NewOwnedPokemon;
use pd_core::ports::{CatalogGatewayPort, GatewayError};
use pd_core::roster::{TeamInsert, TEAM_CAPACITY};

use crate::roster::RosterManager;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddTeamMemberError {
    /// The team already holds six members, locally or on the server.
    /// Views surface this as the "team is full" message.
    #[error("team is already full")]
    TeamFull,

    #[error(transparent)]
    Gateway(GatewayError),
}

/// Adds a member to the team on the server, then locally.
///
/// The local capacity check fails fast without a round trip; the server
/// performs its own check and remains the authoritative point of insertion,
/// so its capacity rejection maps to the same error.
pub struct AddTeamMember {
    gateway: Arc<dyn CatalogGatewayPort>,
    roster: RosterManager,
}

impl AddTeamMember {
    pub fn new(gateway: Arc<dyn CatalogGatewayPort>, roster: RosterManager) -> Self {
        Self { gateway, roster }
    }

    pub async fn execute(&self, member: NewOwnedPokemon) -> Result<(), AddTeamMemberError> {
        let span = info_span!("usecase.add_team_member.execute", code = %member.code);

        async {
            let code = member.membership_code();

            if self.roster.team_count() >= TEAM_CAPACITY && !self.roster.is_in_team(&code) {
                info!("team already at capacity, not contacting server");
                return Err(AddTeamMemberError::TeamFull);
            }

            self.gateway
                .add_team_member(&member)
                .await
                .map_err(|error| match error {
                    GatewayError::TeamFull => AddTeamMemberError::TeamFull,
                    other => AddTeamMemberError::Gateway(other),
                })?;

            // Another mutation may have filled the team while the request
            // was in flight; the registry outcome is the final word.
            match self.roster.add_to_team(code) {
                TeamInsert::Full => Err(AddTeamMemberError::TeamFull),
                outcome => {
                    info!(?outcome, "team member added");
                    Ok(())
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{fresh_manager, MockCatalogGateway};
    use pd_core::ids::PokemonCode;

    fn new_member(code: &str) -> NewOwnedPokemon {
        NewOwnedPokemon::new(code, code, "https://img.example/p.png")
    }

    #[tokio::test]
    async fn test_adds_on_server_then_locally() {
        let gateway = Arc::new(MockCatalogGateway::new());
        let roster = fresh_manager();
        let usecase = AddTeamMember::new(gateway.clone(), roster.clone());

        usecase.execute(new_member("pikachu")).await.unwrap();

        assert_eq!(gateway.added_team.lock().len(), 1);
        assert!(roster.is_in_team(&PokemonCode::new("pikachu")));
    }

    #[tokio::test]
    async fn test_full_team_fails_without_server_call() {
        let gateway = Arc::new(MockCatalogGateway::new());
        let roster = fresh_manager();
        for i in 0..TEAM_CAPACITY {
            roster.add_to_team(PokemonCode::new(format!("member-{i}")));
        }
        let usecase = AddTeamMember::new(gateway.clone(), roster.clone());

        let result = usecase.execute(new_member("mewtwo")).await;

        assert_eq!(result, Err(AddTeamMemberError::TeamFull));
        assert!(gateway.added_team.lock().is_empty());
        assert!(!roster.is_in_team(&PokemonCode::new("mewtwo")));
    }

    #[tokio::test]
    async fn test_server_capacity_rejection_maps_to_team_full() {
        let gateway = Arc::new(MockCatalogGateway::failing(GatewayError::TeamFull));
        let roster = fresh_manager();
        let usecase = AddTeamMember::new(gateway, roster.clone());

        let result = usecase.execute(new_member("pikachu")).await;

        assert_eq!(result, Err(AddTeamMemberError::TeamFull));
        assert!(!roster.is_in_team(&PokemonCode::new("pikachu")));
    }

    #[tokio::test]
    async fn test_other_gateway_errors_pass_through() {
        let gateway = Arc::new(MockCatalogGateway::failing(GatewayError::Unauthorized));
        let roster = fresh_manager();
        let usecase = AddTeamMember::new(gateway, roster.clone());

        let result = usecase.execute(new_member("pikachu")).await;

        assert_eq!(
            result,
            Err(AddTeamMemberError::Gateway(GatewayError::Unauthorized))
        );
        assert!(!roster.is_in_team(&PokemonCode::new("pikachu")));
    }

    #[tokio::test]
    async fn test_no_local_change_when_server_rejects() {
        let gateway = Arc::new(MockCatalogGateway::failing(GatewayError::Rejected {
            message: "Pokémon já está na equipe".to_string(),
        }));
        let roster = fresh_manager();
        let usecase = AddTeamMember::new(gateway, roster.clone());

        let result = usecase.execute(new_member("pikachu")).await;

        assert!(matches!(
            result,
            Err(AddTeamMemberError::Gateway(GatewayError::Rejected { .. }))
        ));
        assert_eq!(roster.team_count(), 0);
    }
}
