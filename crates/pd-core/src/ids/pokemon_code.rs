use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Stable catalog identifier used for membership tests.
///
/// This is the backend's `codigo` column: a PokeAPI species slug such as
/// `"pikachu"`. The backend strips surrounding whitespace before storing it,
/// so construction does the same; beyond that, comparison is exact and
/// case-sensitive — `"Pikachu"` and `"pikachu"` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PokemonCode(String);

impl PokemonCode {
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        Self(code.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for PokemonCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PokemonCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PokemonCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
