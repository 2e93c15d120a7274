pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{OpenWeatherMapFetcher, PostgresConnector, TerminalPrompter};
pub use config::ConfigLoader;
pub use core::{RunReport, WeatherRun};
pub use domain::ports::ProcessEnv;
pub use utils::error::{AppError, Result};
