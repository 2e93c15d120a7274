use crate::config::ConfigLoader;
use crate::domain::model::{AppConfig, FetchOutcome};
use crate::domain::ports::{DatabaseConnector, WeatherFetcher};
use crate::utils::error::{AppError, Result};
use crate::utils::monitor::{StartTime, SystemMonitor};
use crate::utils::redact::mask_query_param;
use std::time::Duration;

#[derive(Debug)]
pub struct RunReport {
    /// `Err` only when the request itself failed; an error status is `Ok`.
    pub weather: Result<FetchOutcome>,
    pub closed_cleanly: bool,
    /// Time since process start when the connection was closed.
    pub elapsed: Duration,
}

pub struct WeatherRun<C: DatabaseConnector, F: WeatherFetcher> {
    connector: C,
    fetcher: F,
    monitor: SystemMonitor,
}

impl<C: DatabaseConnector, F: WeatherFetcher> WeatherRun<C, F> {
    pub fn new(connector: C, fetcher: F) -> Self {
        Self::new_with_monitoring(connector, fetcher, SystemMonitor::new(StartTime::now(), false))
    }

    pub fn new_with_monitoring(connector: C, fetcher: F, monitor: SystemMonitor) -> Self {
        Self {
            connector,
            fetcher,
            monitor,
        }
    }

    /// Loads configuration, then runs. Returns the process exit status.
    pub async fn execute(&self, loader: &ConfigLoader<'_>) -> i32 {
        let code = match loader.load() {
            Ok(config) => {
                self.monitor.log_stats("Configuration");
                match self.run(&config).await {
                    Ok(_) => 0,
                    Err(e) => Self::log_failure(&e),
                }
            }
            Err(e) => {
                tracing::error!(
                    "Something went wrong assimilating the configuration we need (from OS environment variables)."
                );
                Self::log_failure(&e)
            }
        };

        self.monitor.log_final_stats();
        code
    }

    fn log_failure(e: &AppError) -> i32 {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        e.exit_code()
    }

    /// Connect, fetch, close. Only a failed connection is an error; the
    /// weather request and the close are best effort.
    pub async fn run(&self, config: &AppConfig) -> Result<RunReport> {
        tracing::info!("Connecting to postgres database at {}.", config.postgres.host);
        let connection = self.connector.connect(&config.postgres).await?;
        tracing::info!("Postgres database connected successfully.");
        self.monitor.log_stats("Connect");

        let url = config.weather.forecast_url();
        tracing::info!("Requesting forecast: {}", mask_query_param(&url, "appid"));

        let weather = self.fetcher.fetch(&url).await;
        match &weather {
            Ok(outcome) if outcome.is_success() => {
                tracing::info!("Forecast received (HTTP {}) in {:?}", outcome.status, outcome.elapsed);
            }
            Ok(outcome) => {
                tracing::warn!("Forecast endpoint answered HTTP {}, ignoring", outcome.status);
            }
            Err(e) => {
                tracing::warn!("Forecast request failed, ignoring.\n{}", e);
            }
        }
        self.monitor.log_stats("Fetch");

        let closed_cleanly = match connection.close().await {
            Ok(()) => {
                tracing::info!("Postgres connection closed.");
                true
            }
            Err(e) => {
                tracing::warn!("{}", e);
                false
            }
        };

        Ok(RunReport {
            weather,
            closed_cleanly,
            elapsed: self.monitor.elapsed(),
        })
    }
}
