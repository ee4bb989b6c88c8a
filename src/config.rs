// SPDX-License-Identifier: GPL-3.0-only

use std::path::{Path, PathBuf};

use anywho::{Error, anywho};
use serde::{Deserialize, Serialize};

pub const APP_ID: &str = "pokecards";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the PokéApi endpoints, without trailing slash
    pub api_base_url: String,
    /// How many members of a type listing get a card
    pub listing_limit: usize,
    /// Pokémon shown on the generic page
    pub fallback_pokemon: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: String::from("https://pokeapi.co/api/v2"),
            listing_limit: 12,
            fallback_pokemon: String::from("pikachu"),
        }
    }
}

impl Config {
    /// Loads the config from `path`, or from the user config dir if there's one there.
    /// An explicit path that can't be read is an error, a missing default file is not.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_ID).join("config.ron"))
    }

    fn read(path: &Path) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| anywho!("Failed to read config {}: {e}", path.display()))?;
        let config = ron::from_str::<Self>(&data)
            .map_err(|e| anywho!("Invalid config {}: {e}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
