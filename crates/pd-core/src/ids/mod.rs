//! ID type wrappers for type safety.

pub mod pokemon_code;

pub use pokemon_code::PokemonCode;
