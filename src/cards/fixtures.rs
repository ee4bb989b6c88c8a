// SPDX-License-Identifier: GPL-3.0-only

//! In-memory stand-ins for PokéApi data.

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
    time::Duration,
};

use reqwest::StatusCode;
use serde_json::json;

use super::api::{FetchError, PokemonSource};
use crate::entities::{PokemonRecord, PokemonRef, PokemonType, TypeListing};

const BASE_URL: &str = "https://pokeapi.test/api/v2";

/// A record with three abilities and the given types and attack/defense stats
pub fn pokemon(id: i64, name: &str, types: &[&str], attack: i64, defense: i64) -> PokemonRecord {
    let types: Vec<_> = types
        .iter()
        .enumerate()
        .map(|(slot, t)| json!({ "slot": slot + 1, "type": { "name": t, "url": "" } }))
        .collect();

    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "sprites": {
            "front_default": format!("https://img.test/front/{id}.png"),
            "other": { "official-artwork": { "front_default": format!("https://img.test/art/{id}.png") } }
        },
        "types": types,
        "stats": [
            { "base_stat": 45, "stat": { "name": "hp", "url": "" } },
            { "base_stat": attack, "stat": { "name": "attack", "url": "" } },
            { "base_stat": defense, "stat": { "name": "defense", "url": "" } }
        ],
        "abilities": [
            { "ability": { "name": "static", "url": "" } },
            { "ability": { "name": "lightning-rod", "url": "" } },
            { "ability": { "name": "extra-one", "url": "" } }
        ]
    }))
    .expect("fixture is a valid pokemon")
}

/// Serves a single type listing plus pikachu, records every request
#[derive(Default)]
pub struct FakeSource {
    listing: Option<(PokemonType, TypeListing)>,
    records: HashMap<String, PokemonRecord>,
    failing: HashSet<String>,
    listings_requested: Mutex<Vec<PokemonType>>,
    pokemon_requested: Mutex<Vec<PokemonRef>>,
}

impl FakeSource {
    pub fn member_url(id: usize) -> String {
        format!("{BASE_URL}/pokemon/{id}/")
    }

    /// A listing of `members` Pokémon of `type_`, each also carrying the normal type
    pub fn with_listing(type_: PokemonType, members: usize) -> Self {
        let entries: Vec<_> = (1..=members)
            .map(|id| json!({ "slot": 1, "pokemon": { "name": format!("member-{id}"), "url": Self::member_url(id) } }))
            .collect();
        let listing = serde_json::from_value(json!({ "pokemon": entries }))
            .expect("fixture is a valid listing");

        let mut source = Self::default();
        source.listing = Some((type_, listing));
        for id in 1..=members {
            source.records.insert(
                Self::member_url(id),
                pokemon(
                    id as i64,
                    &format!("member-{id}"),
                    &[type_.name(), "normal"],
                    40 + id as i64,
                    60,
                ),
            );
        }
        source
    }

    /// Makes the member with `id` answer with a server error
    pub fn failing(mut self, id: usize) -> Self {
        self.failing.insert(Self::member_url(id));
        self
    }

    pub fn listings_requested(&self) -> Vec<PokemonType> {
        self.listings_requested.lock().unwrap().clone()
    }

    pub fn pokemon_requested(&self) -> Vec<PokemonRef> {
        self.pokemon_requested.lock().unwrap().clone()
    }
}

impl PokemonSource for FakeSource {
    async fn fetch_pokemon(&self, reference: &PokemonRef) -> Result<PokemonRecord, FetchError> {
        self.pokemon_requested
            .lock()
            .unwrap()
            .push(reference.clone());

        let url = reference.url(BASE_URL);
        let pikachu = PokemonRef::Name("pikachu".into()).url(BASE_URL);

        // later members answer first so arrival order differs from request order
        let delay = 20u64.saturating_sub(self.pokemon_requested.lock().unwrap().len() as u64);
        tokio::time::sleep(Duration::from_millis(delay)).await;

        if self.failing.contains(&url) {
            return Err(FetchError::Status {
                url,
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        if url == pikachu {
            return Ok(pokemon(25, "pikachu", &["electric"], 55, 40));
        }

        self.records.get(&url).cloned().ok_or(FetchError::Status {
            url,
            status: StatusCode::NOT_FOUND,
        })
    }

    async fn fetch_type_listing(&self, type_: PokemonType) -> Result<TypeListing, FetchError> {
        self.listings_requested.lock().unwrap().push(type_);

        match &self.listing {
            Some((listed, listing)) if *listed == type_ => Ok(listing.clone()),
            _ => Err(FetchError::Status {
                url: format!("{BASE_URL}/type/{type_}"),
                status: StatusCode::NOT_FOUND,
            }),
        }
    }
}
