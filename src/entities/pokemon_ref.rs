// SPDX-License-Identifier: GPL-3.0-only

/// Something that identifies a single Pokémon: a name/number or a full resource URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokemonRef {
    Name(String),
    Url(String),
}

impl PokemonRef {
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http") {
            PokemonRef::Url(input.to_string())
        } else {
            PokemonRef::Name(input.to_string())
        }
    }

    /// URL to request, URLs are passed through untouched
    pub fn url(&self, base_url: &str) -> String {
        match self {
            PokemonRef::Url(url) => url.clone(),
            PokemonRef::Name(name) => {
                format!("{}/pokemon/{}", base_url.trim_end_matches('/'), name)
            }
        }
    }
}

impl From<&str> for PokemonRef {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl std::fmt::Display for PokemonRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PokemonRef::Name(name) => write!(f, "{name}"),
            PokemonRef::Url(url) => write!(f, "{url}"),
        }
    }
}
