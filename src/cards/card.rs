// SPDX-License-Identifier: GPL-3.0-only

use minijinja::{Environment, context};
use serde::Serialize;

use crate::{
    entities::{DEFAULT_COLOR, PokemonRecord, PokemonType, color_for},
    fl,
    utils::{join_names, padded_id, scale_numbers},
};

const CARD_TEMPLATE: &str = "card.html";

/// How many abilities make it onto a card
const MAX_ABILITIES: usize = 2;

/// Everything a card shows, already formatted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub name: String,
    /// Zero padded Pokédex number, without the `#`
    pub number: String,
    pub image_url: String,
    pub accent: &'static str,
    /// Metres
    pub height: String,
    /// Kilograms
    pub weight: String,
    pub abilities: String,
    pub types: Vec<TypeBadge>,
    pub bars: Vec<StatBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeBadge {
    pub name: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatBar {
    pub label: &'static str,
    pub value: i64,
    /// Percentage, capped at 100
    pub width: i64,
}

impl StatBar {
    fn new(label: &'static str, value: i64) -> Self {
        Self {
            label,
            value,
            width: value.clamp(0, 100),
        }
    }
}

impl Card {
    pub fn build(record: &PokemonRecord, page_override: Option<PokemonType>) -> Self {
        Card {
            name: record.name.clone(),
            number: padded_id(record.id),
            image_url: record.artwork_url().unwrap_or_default().to_string(),
            accent: accent_color(record, page_override),
            height: scale_numbers(record.height).to_string(),
            weight: scale_numbers(record.weight).to_string(),
            abilities: join_names(
                record.abilities.iter().map(|a| a.ability.name.as_str()),
                MAX_ABILITIES,
            ),
            types: record
                .type_names()
                .map(|name| TypeBadge {
                    name: name.to_string(),
                    color: color_for(name),
                })
                .collect(),
            bars: vec![
                StatBar::new("ATK", record.base_stat("attack").unwrap_or(0)),
                StatBar::new("DEF", record.base_stat("defense").unwrap_or(0)),
            ],
        }
    }
}

/// The page override wins, then the first type of the Pokémon, then gray
pub fn accent_color(record: &PokemonRecord, page_override: Option<PokemonType>) -> &'static str {
    match page_override {
        Some(type_) => type_.color(),
        None => record
            .type_names()
            .next()
            .map(color_for)
            .unwrap_or(DEFAULT_COLOR),
    }
}

/// Localized label texts of a card
#[derive(Debug, Clone, Serialize)]
struct Labels {
    height: String,
    weight: String,
    abilities: String,
}

impl Labels {
    fn localized() -> Self {
        Self {
            height: fl!("height"),
            weight: fl!("weight"),
            abilities: fl!("abilities"),
        }
    }
}

/// Turns cards into HTML fragments
pub struct CardRenderer {
    env: Environment<'static>,
    labels: Labels,
}

impl CardRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(
            CARD_TEMPLATE,
            include_str!("../../templates/card.html"),
        )?;

        Ok(Self {
            env,
            labels: Labels::localized(),
        })
    }

    pub fn render(&self, card: &Card) -> Result<String, minijinja::Error> {
        self.env
            .get_template(CARD_TEMPLATE)?
            .render(context! { card => card, labels => &self.labels })
    }
}
