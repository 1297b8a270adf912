use anyhow::{Context, Result};
use clap::Parser;

use incrementer::cli::{Cli, Command};
use incrementer::config::Config;
use incrementer::logging::{init_tracing, LogTarget};
use incrementer::replay::replay_path;
use incrementer::ui::counter::CounterReducer;
use incrementer::ui::mvi::Store;
use incrementer::ui::runtime;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    match cli.selected_command() {
        Command::Run => {
            let log_path = config.logging.log_path();
            init_tracing(&config.logging.level, LogTarget::File(log_path))?;
            runtime::run(config.initial_state()).context("running terminal UI")?;
        }
        Command::Replay { script } => {
            init_tracing(&config.logging.level, LogTarget::Stderr)?;
            let mut store = Store::<CounterReducer>::new(config.initial_state());
            let outcome = replay_path(&script, &mut store)?;
            tracing::info!(
                applied = outcome.applied,
                ignored = outcome.ignored,
                "replay finished"
            );
            println!("{}", serde_json::to_string(&outcome.state)?);
        }
    }

    Ok(())
}
