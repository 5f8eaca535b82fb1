use serde::{Deserialize, Serialize};

use crate::ids::PokemonCode;

/// An entry of the browsable catalog (`GET /pokemon` responses).
///
/// `favorito` and `equipe` reflect the server's view at response time.
/// Consumers re-derive both flags from local membership state, so a response
/// that raced a mutation cannot roll a card's badge backwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPokemon {
    pub id: i64,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(default, rename = "imagem")]
    pub image_url: Option<String>,

    #[serde(default, rename = "favorito")]
    pub favorite: bool,

    #[serde(default, rename = "equipe")]
    pub in_team: bool,
}

impl CatalogPokemon {
    /// Catalog listings key members by name.
    pub fn membership_code(&self) -> PokemonCode {
        PokemonCode::new(&self.name)
    }
}

/// Browse query for the catalog listing. Unset fields are omitted from the
/// request and take the server's defaults (`limit` 20, `offset` 0).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    /// Partial, case-insensitive name match.
    pub name: Option<String>,

    /// Game generation, 1 through 9.
    pub generation: Option<u8>,

    /// Page size; the server clamps to 1..=100.
    pub limit: Option<u32>,

    pub offset: Option<u32>,
}

impl CatalogFilter {
    /// Query pairs in the server's parameter names, skipping unset fields.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("nome", name.clone()));
        }
        if let Some(generation) = self.generation {
            pairs.push(("geracao", generation.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}
