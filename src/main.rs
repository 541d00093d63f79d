mod cli;
mod config;
mod images;
mod model;
mod repository;
mod storage;

use std::{io, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Locations};
use config::Config;
use images::{DirectoryBundle, ImageStore};
use repository::{LogObserver, RecipeRepository};
use storage::SqliteStore;

fn main() {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| exit_with(&e));
    init_logging(&config);

    if let Err(e) = run(cli, &config) {
        exit_with(&e);
    }
}

fn run(cli: Cli, config: &Config) -> Result<(), String> {
    let locations = Locations {
        database: config.database_path()?,
        assets: config.assets_dir()?,
    };

    let store = SqliteStore::open(&locations.database)
        .map_err(|e| format!("failed to open {}: {e}", locations.database.display()))?;
    let mut repo =
        RecipeRepository::load(store).map_err(|e| format!("failed to load recipes: {e}"))?;
    repo.subscribe(Box::new(LogObserver));

    let images = ImageStore::new(
        DirectoryBundle::new(&locations.assets),
        config.images_dir()?,
    );

    cli::run(cli.command, &mut repo, &images, &locations)
}

/// `RUST_LOG` wins, then `log` from the config file, then `warn`.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log.as_deref().unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn exit_with(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}
