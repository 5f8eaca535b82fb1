//! # pd-core
//!
//! Core domain models and business logic for Pokedeck.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod config;
pub mod ids;
pub mod ports;
pub mod roster;

// Re-export commonly used types at the crate root
pub use catalog::{CatalogFilter, CatalogPokemon, NewOwnedPokemon, OwnedPokemon};
pub use config::AppConfig;
pub use ids::PokemonCode;
pub use roster::{Roster, RosterSnapshot, Team, TeamInsert, TEAM_CAPACITY};
