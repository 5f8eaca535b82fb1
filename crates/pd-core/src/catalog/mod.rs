//! Catalog models: the user's server-side collection entries and the
//! browsable listing with its filter.

pub mod browse;
pub mod entry;

pub use browse::{CatalogFilter, CatalogPokemon};
pub use entry::{NewOwnedPokemon, OwnedPokemon};
