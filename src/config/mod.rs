#[cfg(feature = "cli")]
pub mod cli;
pub mod env;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use env::{resolve_secret, ConfigLoader};
