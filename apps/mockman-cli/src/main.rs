mod cli;
mod commands;
mod elements;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use commands::Output;
use mockman_core::app::App;
use mockman_core::config::{MockmanConfig, Pacing};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mockman=info,mockman_core=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config =
        MockmanConfig::resolve(cli.data_dir).context("failed to resolve the data directory")?;
    if cli.instant {
        config = config.with_pacing(Pacing::instant());
    }
    let mut app = App::bootstrap(config).context("failed to load mockman state")?;
    commands::run(&mut app, cli.command, &Output::new(cli.json))
}
