use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ui::counter::CounterState;

/// Levels accepted by `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub initial: InitialConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Counter state the application starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialConfig {
    /// Starting number (default: 0).
    #[serde(default)]
    pub number: i64,
    /// Starting step (default: 1).
    #[serde(default = "default_increment_by")]
    pub increment_by: i64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter level; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive UI. Defaults to the user cache dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_increment_by() -> i64 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for InitialConfig {
    fn default() -> Self {
        Self {
            number: 0,
            increment_by: default_increment_by(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    pub fn initial_state(&self) -> CounterState {
        CounterState::new(self.initial.number, self.initial.increment_by)
    }
}

impl LoggingConfig {
    /// Configured file, or `<cache_dir>/number-incrementer/incrementer.log`.
    pub fn log_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("number-incrementer")
                .join("incrementer.log")
        })
    }
}
