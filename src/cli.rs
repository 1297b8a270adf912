use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "incrementer", version, about = "Increment a number, one step at a time")]
pub struct Cli {
    /// Config file (default: <config_dir>/number-incrementer/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Starting number
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub number: Option<i64>,

    /// Starting increment step
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub increment_by: Option<i64>,

    /// Log level: trace, debug, info, warn, error, off
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log file used by the interactive UI
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive UI (default)
    Run,
    /// Apply actions from a script and print the final state as JSON
    Replay {
        /// Script path, or `-` for stdin
        script: PathBuf,
    },
}

impl Cli {
    /// Overlay command-line flags on top of file configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(number) = self.number {
            config.initial.number = number;
        }
        if let Some(increment_by) = self.increment_by {
            config.initial.increment_by = increment_by;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }

    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_run() {
        let cli = Cli::parse_from(["incrementer"]);
        assert_eq!(cli.selected_command(), Command::Run);
    }

    #[test]
    fn negative_numbers_are_accepted() {
        let cli = Cli::parse_from(["incrementer", "--number", "-4", "--increment-by", "-2"]);
        assert_eq!(cli.number, Some(-4));
        assert_eq!(cli.increment_by, Some(-2));
    }
}
