use serde::{Deserialize, Serialize};

use crate::ids::PokemonCode;

/// An entry of the user's server-side collection, as returned by the
/// `/user-pokemon/equipe` and `/user-pokemon/favoritos` listings.
///
/// Every field defaults: older server rows can miss `codigo`, and the
/// reconciliation path must accept them (falling back to `nome`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnedPokemon {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, rename = "codigo")]
    pub code: String,

    #[serde(default, rename = "nome")]
    pub name: String,

    #[serde(default, rename = "imagem")]
    pub image_url: String,

    #[serde(default, rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub primary_type: Option<String>,
}

impl OwnedPokemon {
    /// The membership key for this entry.
    ///
    /// The canonical `codigo` wins; the display `nome` is the fallback for
    /// entries recorded without a code. An entry carrying neither has no
    /// usable key and is skipped by reconciliation.
    pub fn membership_code(&self) -> Option<PokemonCode> {
        let raw = if self.code.trim().is_empty() {
            &self.name
        } else {
            &self.code
        };
        let code = PokemonCode::new(raw);
        if code.is_empty() {
            None
        } else {
            Some(code)
        }
    }
}

/// The insert shape sent when adding a member to a server collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOwnedPokemon {
    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "imagem")]
    pub image_url: String,
}

impl NewOwnedPokemon {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            image_url: image_url.into(),
        }
    }

    pub fn membership_code(&self) -> PokemonCode {
        PokemonCode::new(&self.code)
    }
}
