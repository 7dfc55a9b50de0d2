use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use topicdeck::catalogue::{CatalogueStore, WallClockIds};
use topicdeck::config::Config;
use topicdeck::generate::PassthroughGenerator;
use topicdeck::ui::{self, app::App};

/// Terminal topic browser and blog draft editor.
#[derive(Debug, Parser)]
#[command(name = "topicdeck", version, about)]
struct Cli {
    /// Path to a TOML config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    topicdeck::logging::init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    info!(
        categories = config.catalogue.len(),
        target = %config.defaults.target_category,
        "catalogue seeded"
    );

    let catalogue = CatalogueStore::new(
        config.catalogue.clone(),
        config.defaults.target_category.clone(),
        Box::new(WallClockIds),
    );
    let app = App::new(catalogue, Box::new(PassthroughGenerator));

    ui::run(app, Duration::from_millis(config.defaults.tick_rate_ms))
        .context("terminal UI failed")?;
    Ok(())
}
