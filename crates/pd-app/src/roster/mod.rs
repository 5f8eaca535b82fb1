//! The membership registry and its change streams.

pub mod manager;

pub use manager::RosterManager;
