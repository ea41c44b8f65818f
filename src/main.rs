use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use tally::config::Config;
use tally::{logging, ui};

#[derive(Debug, Parser)]
#[command(name = "tally", version, about = "Terminal counter with a unidirectional store")]
struct Cli {
    /// Value the counter starts at (overrides the config file).
    #[arg(long)]
    initial: Option<i64>,

    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from '{}'", path.display()))?,
        None => Config::load().context("failed to load configuration")?,
    };

    let initial_value = cli.initial.unwrap_or(config.counter.initial_value);
    tracing::info!(initial_value, "starting tally");

    ui::run(config, initial_value)
}
