// Adapters layer: concrete implementations of the domain ports.

pub mod openweathermap;
pub mod postgres;
pub mod terminal;

pub use openweathermap::OpenWeatherMapFetcher;
pub use postgres::{PostgresConnection, PostgresConnector};
pub use terminal::TerminalPrompter;
