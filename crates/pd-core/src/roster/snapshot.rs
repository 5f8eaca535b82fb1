use serde::{Deserialize, Serialize};

use crate::ids::PokemonCode;

/// The persisted shape of the roster: two named entries in one document.
///
/// The `favoritos` name on disk is load-bearing; existing data files use it
/// and renaming the field would orphan them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    #[serde(default)]
    pub team: Vec<PokemonCode>,

    #[serde(default, rename = "favoritos")]
    pub favorites: Vec<PokemonCode>,
}

impl RosterSnapshot {
    pub fn is_empty(&self) -> bool {
        self.team.is_empty() && self.favorites.is_empty()
    }
}
