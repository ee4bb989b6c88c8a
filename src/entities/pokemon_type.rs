// SPDX-License-Identifier: GPL-3.0-only

use std::str::FromStr;

/// Color used for any type name we don't know about
pub const DEFAULT_COLOR: &str = "#777";

/// Possible Pokémon Types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl std::fmt::Display for PokemonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for PokemonType {
    type Err = UnknownType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pokémon type: {0}")]
pub struct UnknownType(pub String);

impl PokemonType {
    /// List of all Pokémon Types
    pub const ALL: &'static [Self] = &[
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Grass,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];

    /// Name as used by PokéApi
    pub fn name(&self) -> &'static str {
        match &self {
            PokemonType::Normal => "normal",
            PokemonType::Fire => "fire",
            PokemonType::Water => "water",
            PokemonType::Electric => "electric",
            PokemonType::Grass => "grass",
            PokemonType::Ice => "ice",
            PokemonType::Fighting => "fighting",
            PokemonType::Poison => "poison",
            PokemonType::Ground => "ground",
            PokemonType::Flying => "flying",
            PokemonType::Psychic => "psychic",
            PokemonType::Bug => "bug",
            PokemonType::Rock => "rock",
            PokemonType::Ghost => "ghost",
            PokemonType::Dragon => "dragon",
            PokemonType::Dark => "dark",
            PokemonType::Steel => "steel",
            PokemonType::Fairy => "fairy",
        }
    }

    /// Display color of the type, as a hex string
    pub fn color(&self) -> &'static str {
        match &self {
            PokemonType::Normal => "#A8A77A",
            PokemonType::Fire => "#EE8130",
            PokemonType::Water => "#6390F0",
            PokemonType::Electric => "#F7D02C",
            PokemonType::Grass => "#7AC74C",
            PokemonType::Ice => "#96D9D6",
            PokemonType::Fighting => "#C22E28",
            PokemonType::Poison => "#A33EA1",
            PokemonType::Ground => "#E2BF65",
            PokemonType::Flying => "#A98FF3",
            PokemonType::Psychic => "#F95587",
            PokemonType::Bug => "#A6B91A",
            PokemonType::Rock => "#B6A136",
            PokemonType::Ghost => "#735797",
            PokemonType::Dragon => "#6F35FC",
            PokemonType::Dark => "#705746",
            PokemonType::Steel => "#B7B7CE",
            PokemonType::Fairy => "#D685AD",
        }
    }
}

/// Looks up the color of a type by its PokéApi name, falling back to [`DEFAULT_COLOR`]
pub fn color_for(type_name: &str) -> &'static str {
    type_name
        .parse::<PokemonType>()
        .map(|t| t.color())
        .unwrap_or(DEFAULT_COLOR)
}
