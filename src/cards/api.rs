// SPDX-License-Identifier: GPL-3.0-only

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::entities::{PokemonRecord, PokemonRef, PokemonType, TypeListing};

/// Why a single request didn't produce usable data
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("unexpected response from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("incomplete data from {url}: {reason}")]
    Incomplete { url: String, reason: &'static str },
}

/// Anything that can hand us Pokémon data
#[allow(async_fn_in_trait)]
pub trait PokemonSource {
    async fn fetch_pokemon(&self, reference: &PokemonRef) -> Result<PokemonRecord, FetchError>;

    async fn fetch_type_listing(&self, type_: PokemonType) -> Result<TypeListing, FetchError>;
}

#[derive(Debug, Clone)]
pub struct PokeApi {
    base_url: String,
    client: reqwest::Client,
}

impl PokeApi {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pokecards/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(12)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// GETs `url` and decodes the body, any non-success status is an error
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!(url, "requesting");

        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Malformed {
            url: url.to_string(),
            source,
        })
    }
}

impl PokemonSource for PokeApi {
    async fn fetch_pokemon(&self, reference: &PokemonRef) -> Result<PokemonRecord, FetchError> {
        let url = reference.url(&self.base_url);
        let record: PokemonRecord = self.get_json(&url).await?;

        if record.types.is_empty() {
            return Err(FetchError::Incomplete {
                url,
                reason: "pokémon has no types",
            });
        }

        Ok(record)
    }

    async fn fetch_type_listing(&self, type_: PokemonType) -> Result<TypeListing, FetchError> {
        let url = format!("{}/type/{}", self.base_url, type_.name());
        self.get_json(&url).await
    }
}
