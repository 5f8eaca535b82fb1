pub mod client;

pub use client::HttpCatalogGateway;
