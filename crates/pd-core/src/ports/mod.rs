//! Port interfaces between the domain and infrastructure layers.
//!
//! Use cases depend on these traits; adapters in `pd-infra` implement them.
//! The core stays free of I/O so the membership logic tests without a server
//! or a filesystem.

pub mod catalog_gateway;
pub mod errors;
pub mod roster_store;

pub use catalog_gateway::CatalogGatewayPort;
pub use errors::GatewayError;
pub use roster_store::RosterStorePort;
