//! Pokedeck Application Layer
//!
//! This crate owns the membership registry, its change broadcasting, and the
//! use cases views call into.

pub mod broadcast;
pub mod roster;
pub mod usecases;

pub use broadcast::{StateSubject, Subscription};
pub use roster::RosterManager;
