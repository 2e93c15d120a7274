pub mod run;

pub use crate::domain::model::{AppConfig, FetchOutcome, PostgresConfig, WeatherConfig};
pub use crate::domain::ports::{DatabaseConnection, DatabaseConnector, WeatherFetcher};
pub use crate::utils::error::Result;
pub use run::{RunReport, WeatherRun};
