//! Pokedeck client engine.
//!
//! Keeps a trainer's team and favorites consistent across the catalog
//! server, local storage, and any number of live views. The heavy lifting
//! lives in the workspace crates; this facade wires their default adapters
//! together and re-exports the public surface.

pub mod app;
pub mod config;

pub use app::App;

// Re-export the surface consumers need without depending on member crates
pub use pd_app::usecases::{
    AddFavorite, AddTeamMember, AddTeamMemberError, BrowseCatalog, RefreshRoster, RemoveFavorite,
    RemoveTeamMember, ResetSession,
};
pub use pd_app::{RosterManager, StateSubject, Subscription};
pub use pd_core::catalog::{CatalogFilter, CatalogPokemon, NewOwnedPokemon, OwnedPokemon};
pub use pd_core::config::{ApiConfig, AppConfig, StorageConfig};
pub use pd_core::ids::PokemonCode;
pub use pd_core::ports::{CatalogGatewayPort, GatewayError, RosterStorePort};
pub use pd_core::roster::{RosterSnapshot, TeamInsert, TEAM_CAPACITY};
pub use pd_infra::{FileRosterStore, HttpCatalogGateway};
