// SPDX-License-Identifier: GPL-3.0-only

use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anywho::{Error, anywho};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    cards::{
        CardCore, RenderReport,
        api::{PokeApi, PokemonSource},
        card::CardRenderer,
        page::HostPage,
    },
    config::Config,
};

mod cards;
mod config;
mod entities;
mod i18n;
mod utils;

/// Fills an HTML page with Pokémon cards from PokéApi.
///
/// The page decides what gets shown: a `container-solo`, `container-voador`,
/// `container-psiquico` or `container-inseto` element gets the first members
/// of the ground, flying, psychic or bug type, a `grid` element gets a single
/// Pokémon.
#[derive(Debug, Parser)]
#[command(name = "pokecards", version, about)]
struct Cli {
    /// HTML page to fill, `-` reads it from stdin
    page: PathBuf,

    /// Where to write the filled page, stdout if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file, defaults to the one in the user config directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Language of the card labels, e.g. `en` or `pt-BR`
    #[arg(long)]
    lang: Option<String>,

    /// Exit with an error if any card could not be rendered
    #[arg(long)]
    strict: bool,

    /// Log every request
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info,pokecards=debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<ExitCode, Error> {
    init_localization(cli.lang.as_deref())?;

    let config = Config::load(cli.config.as_deref())?;
    let source = read_page(&cli.page)?;
    let mut page = HostPage::parse(&source);

    let api = PokeApi::new(&config.api_base_url)?;
    let renderer = CardRenderer::new()?;
    let core = CardCore::new(api, renderer, &config);

    let report = fill_page(&core, &mut page, cli.output.as_deref()).await?;

    if cli.strict && !report.failed.is_empty() {
        eprintln!(
            "{} of {} cards failed on the {} page:",
            report.failed.len(),
            report.requested,
            report.mode
        );
        for (reference, err) in &report.failed {
            eprintln!("  {reference}: {err}");
        }
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Renders the cards and writes the page out, even when rendering failed halfway
async fn fill_page<S: PokemonSource>(
    core: &CardCore<S>,
    page: &mut HostPage,
    output: Option<&Path>,
) -> Result<RenderReport, Error> {
    let rendered = core.render_page(page).await;
    write_page(output, &page.to_html())?;
    Ok(rendered?)
}

fn init_localization(lang: Option<&str>) -> Result<(), Error> {
    let requested_languages = match lang {
        Some(lang) => vec![
            lang.parse()
                .map_err(|e| anywho!("Invalid language {lang}: {e}"))?,
        ],
        // Get the system's preferred languages.
        None => i18n_embed::DesktopLanguageRequester::requested_languages(),
    };

    i18n::init(&requested_languages);
    Ok(())
}

fn read_page(path: &Path) -> Result<String, Error> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    std::fs::read_to_string(path).map_err(|e| anywho!("Failed to read {}: {e}", path.display()))
}

fn write_page(path: Option<&Path>, html: &str) -> Result<(), Error> {
    match path {
        Some(path) => {
            std::fs::write(path, html)
                .map_err(|e| anywho!("Failed to write {}: {e}", path.display()))?;
            tracing::info!(path = %path.display(), "page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
