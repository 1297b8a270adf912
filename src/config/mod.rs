//! Configuration: initial counter state and logging.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, InitialConfig, LoggingConfig, LOG_LEVELS};
