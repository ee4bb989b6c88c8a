// SPDX-License-Identifier: GPL-3.0-only

mod page_mode;
mod pokemon_record;
mod pokemon_ref;
mod pokemon_type;

pub use page_mode::{DataSource, PageMode};
pub use pokemon_record::{PokemonRecord, TypeListing};
pub use pokemon_ref::PokemonRef;
pub use pokemon_type::{DEFAULT_COLOR, PokemonType, color_for};
