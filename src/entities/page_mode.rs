// SPDX-License-Identifier: GPL-3.0-only

use super::{PokemonRef, PokemonType};

/// Which kind of page we are rendering into, decided by the container it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    Ground,
    Flying,
    Psychic,
    Bug,
    Generic,
    None,
}

/// Where the cards of a page come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The first `limit` members of a type
    TypeListing { type_: PokemonType, limit: usize },
    Single(PokemonRef),
}

impl PageMode {
    /// Modes with a container, in the order they are looked up
    pub const BY_PRIORITY: &'static [Self] = &[
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Generic,
    ];

    /// Picks the first mode whose container exists
    pub fn resolve(has_container: impl Fn(&str) -> bool) -> Self {
        Self::BY_PRIORITY
            .iter()
            .copied()
            .find(|mode| mode.container_id().is_some_and(&has_container))
            .unwrap_or(PageMode::None)
    }

    /// Container the cards of any mode are appended to, `grid` is preferred over the type containers
    pub fn append_target(has_container: impl Fn(&str) -> bool) -> Option<&'static str> {
        [Self::Generic, Self::Ground, Self::Flying, Self::Psychic, Self::Bug]
            .iter()
            .filter_map(|mode| mode.container_id())
            .find(|id| has_container(id))
    }

    pub fn container_id(&self) -> Option<&'static str> {
        match self {
            PageMode::Ground => Some("container-solo"),
            PageMode::Flying => Some("container-voador"),
            PageMode::Psychic => Some("container-psiquico"),
            PageMode::Bug => Some("container-inseto"),
            PageMode::Generic => Some("grid"),
            PageMode::None => None,
        }
    }

    /// Type whose color every card on the page is forced to use
    pub fn color_override(&self) -> Option<PokemonType> {
        match self {
            PageMode::Ground => Some(PokemonType::Ground),
            PageMode::Flying => Some(PokemonType::Flying),
            PageMode::Psychic => Some(PokemonType::Psychic),
            PageMode::Bug => Some(PokemonType::Bug),
            PageMode::Generic | PageMode::None => None,
        }
    }

    pub fn data_source(&self, listing_limit: usize, fallback: &str) -> Option<DataSource> {
        match self {
            PageMode::Generic => Some(DataSource::Single(PokemonRef::parse(fallback))),
            PageMode::None => None,
            mode => mode.color_override().map(|type_| DataSource::TypeListing {
                type_,
                limit: listing_limit,
            }),
        }
    }
}

impl std::fmt::Display for PageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PageMode::Ground => "ground",
            PageMode::Flying => "flying",
            PageMode::Psychic => "psychic",
            PageMode::Bug => "bug",
            PageMode::Generic => "generic",
            PageMode::None => "none",
        };
        write!(f, "{name}")
    }
}
