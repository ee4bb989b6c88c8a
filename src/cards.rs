// SPDX-License-Identifier: GPL-3.0-only

use futures::StreamExt;

use crate::{
    config::Config,
    entities::{DataSource, PageMode, PokemonRef, PokemonType},
};

pub mod api;
pub mod card;
pub mod page;

#[cfg(test)]
pub(crate) mod fixtures;

use api::{FetchError, PokemonSource};
use card::{Card, CardRenderer};
use page::{HostPage, PageError};

/// Why a single card didn't make it onto the page
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("could not render card: {0}")]
    Render(#[from] minijinja::Error),
}

/// Page level failures, nothing gets rendered when one of these happens
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("could not list the {type_} type: {source}")]
    Listing {
        type_: PokemonType,
        #[source]
        source: FetchError,
    },
    #[error(transparent)]
    Page(#[from] PageError),
}

/// What happened while rendering a page
#[derive(Debug)]
pub struct RenderReport {
    pub mode: PageMode,
    pub requested: usize,
    pub rendered: usize,
    pub failed: Vec<(PokemonRef, CardError)>,
}

impl RenderReport {
    fn new(mode: PageMode) -> Self {
        Self {
            mode,
            requested: 0,
            rendered: 0,
            failed: Vec::new(),
        }
    }
}

/// Fills host pages with Pokémon cards
pub struct CardCore<S> {
    source: S,
    renderer: CardRenderer,
    listing_limit: usize,
    fallback_pokemon: String,
}

impl<S: PokemonSource> CardCore<S> {
    pub fn new(source: S, renderer: CardRenderer, config: &Config) -> Self {
        Self {
            source,
            renderer,
            listing_limit: config.listing_limit,
            fallback_pokemon: config.fallback_pokemon.clone(),
        }
    }

    /// Works out what the page wants and appends one card per Pokémon, in the order they arrive.
    /// Cards that fail are logged and left out, they never stop the others.
    pub async fn render_page(&self, page: &mut HostPage) -> Result<RenderReport, RenderError> {
        let mode = PageMode::resolve(|id| page.has_container(id));
        let mut report = RenderReport::new(mode);

        let (Some(container), Some(data_source)) = (
            PageMode::append_target(|id| page.has_container(id)),
            mode.data_source(self.listing_limit, &self.fallback_pokemon),
        ) else {
            tracing::info!("no card container on the page, nothing to render");
            return Ok(report);
        };

        tracing::info!(%mode, container, "rendering page");

        let references = self.references(data_source).await?;
        report.requested = references.len();

        let page_override = mode.color_override();
        let mut cards = futures::stream::iter(references)
            .map(|reference| async move {
                let outcome = self.fetch_and_build(&reference, page_override).await;
                (reference, outcome)
            })
            // every card gets its own request, no cap
            .buffer_unordered(report.requested.max(1));

        while let Some((reference, outcome)) = cards.next().await {
            match outcome {
                Ok(markup) => {
                    page.append_fragment(container, &markup)?;
                    report.rendered += 1;
                }
                Err(err) => {
                    tracing::error!(pokemon = %reference, "card skipped: {err}");
                    report.failed.push((reference, err));
                }
            }
        }

        tracing::info!(
            requested = report.requested,
            rendered = report.rendered,
            failed = report.failed.len(),
            "page rendered"
        );

        Ok(report)
    }

    async fn references(&self, data_source: DataSource) -> Result<Vec<PokemonRef>, RenderError> {
        match data_source {
            DataSource::Single(reference) => Ok(vec![reference]),
            DataSource::TypeListing { type_, limit } => {
                let listing = self
                    .source
                    .fetch_type_listing(type_)
                    .await
                    .map_err(|source| RenderError::Listing { type_, source })?;

                Ok(listing
                    .member_urls(limit)
                    .iter()
                    .map(|url| PokemonRef::parse(url))
                    .collect())
            }
        }
    }

    /// Fetches one Pokémon and renders its card
    async fn fetch_and_build(
        &self,
        reference: &PokemonRef,
        page_override: Option<PokemonType>,
    ) -> Result<String, CardError> {
        let record = self.source.fetch_pokemon(reference).await?;
        let card = Card::build(&record, page_override);
        Ok(self.renderer.render(&card)?)
    }
}
