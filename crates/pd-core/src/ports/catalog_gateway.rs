use async_trait::async_trait;

use crate::catalog::{CatalogFilter, CatalogPokemon, NewOwnedPokemon, OwnedPokemon};
use crate::ids::PokemonCode;
use crate::ports::errors::GatewayError;

/// Remote collection operations against the catalog server.
#[async_trait]
pub trait CatalogGatewayPort: Send + Sync {
    /// List the server-side team.
    async fn fetch_team(&self) -> Result<Vec<OwnedPokemon>, GatewayError>;

    /// List the server-side favorites.
    async fn fetch_favorites(&self) -> Result<Vec<OwnedPokemon>, GatewayError>;

    /// Add to the server-side team. Fails with [`GatewayError::TeamFull`]
    /// when the server's own capacity check rejects the insert.
    async fn add_team_member(&self, member: &NewOwnedPokemon) -> Result<(), GatewayError>;

    async fn remove_team_member(&self, code: &PokemonCode) -> Result<(), GatewayError>;

    async fn add_favorite(&self, member: &NewOwnedPokemon) -> Result<(), GatewayError>;

    async fn remove_favorite(&self, code: &PokemonCode) -> Result<(), GatewayError>;

    /// Browse the public catalog with optional name/generation filters.
    async fn browse_catalog(
        &self,
        filter: &CatalogFilter,
    ) -> Result<Vec<CatalogPokemon>, GatewayError>;
}
