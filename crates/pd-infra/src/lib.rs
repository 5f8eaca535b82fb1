//! Infrastructure adapters for Pokedeck: the roster snapshot file store and
//! the HTTP catalog gateway.

pub mod api;
pub mod fs;
pub mod roster;

pub use api::HttpCatalogGateway;
pub use roster::FileRosterStore;
