// SPDX-License-Identifier: GPL-3.0-only

use serde::Deserialize;

/// A Pokémon as described by the `/pokemon/{name-or-id}` endpoint.
///
/// Only the fields needed to build a card are kept, everything else in the
/// response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonRecord {
    pub id: i64,
    pub name: String,
    /// Decimetres
    pub height: i64,
    /// Hectograms
    pub weight: i64,
    pub sprites: PokemonSprites,
    pub types: Vec<PokemonTypeSlot>,
    pub stats: Vec<PokemonStat>,
    pub abilities: Vec<PokemonAbility>,
}

impl PokemonRecord {
    /// Official artwork if available, the default front sprite otherwise
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|artwork| artwork.front_default.as_deref())
            .or(self.sprites.front_default.as_deref())
    }

    /// Type names in slot order
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.type_.name.as_str())
    }

    /// Base value of the stat with the given name, the last entry wins if it is repeated
    pub fn base_stat(&self, name: &str) -> Option<i64> {
        self.stats
            .iter()
            .rev()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PokemonSprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub stat: NamedResource,
    pub base_stat: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonAbility {
    pub ability: NamedResource,
}

/// `{ name, url }` pair PokéApi uses to link resources
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A type as described by the `/type/{name}` endpoint, only its members are kept
#[derive(Debug, Clone, Deserialize)]
pub struct TypeListing {
    pub pokemon: Vec<TypeMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeMember {
    pub pokemon: NamedResource,
}

impl TypeListing {
    /// Resource URLs of the first `limit` members
    pub fn member_urls(&self, limit: usize) -> Vec<String> {
        self.pokemon
            .iter()
            .take(limit)
            .map(|member| member.pokemon.url.clone())
            .collect()
    }
}
