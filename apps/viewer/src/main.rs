use std::{io, path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Parser;
use records_client::{ApplicationsController, HttpRecordsApi};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod driver;
mod render;

use config::{load_settings, validate_api_url};
use driver::{run, Mode};

#[derive(Parser, Debug)]
#[command(about = "List loan applications page by page")]
struct Args {
    #[arg(long, default_value = "viewer.toml")]
    config: PathBuf,
    /// Overrides the Records API url from settings.
    #[arg(long)]
    api_url: Option<String>,
    /// Total number of pages to load before exiting.
    #[arg(
        long,
        value_parser = clap::value_parser!(u32).range(1..),
        conflicts_with_all = ["all", "interactive"]
    )]
    pages: Option<u32>,
    /// Keep loading until the last page.
    #[arg(long, conflicts_with = "interactive")]
    all: bool,
    /// Ask before loading each further page.
    #[arg(long)]
    interactive: bool,
}

impl Args {
    fn mode(&self) -> Mode {
        if self.interactive {
            Mode::Interactive
        } else if self.all {
            Mode::All
        } else {
            Mode::Pages(self.pages.unwrap_or(1))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config)?;
    if let Some(api_url) = &args.api_url {
        settings.api_url = api_url.clone();
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let api_url = validate_api_url(&settings.api_url)?;
    info!(api_url = %api_url, "viewer: starting");

    let controller = ApplicationsController::new(Arc::new(HttpRecordsApi::new(api_url)));
    let input = BufReader::new(tokio::io::stdin());
    run(&controller, args.mode(), io::stdout(), input).await
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
