use crate::domain::model::FetchOutcome;
use crate::domain::ports::WeatherFetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Instant;

/// Plain GET against the forecast endpoint. No timeout and no retry; the
/// body is dropped unread.
#[derive(Debug, Clone, Default)]
pub struct OpenWeatherMapFetcher {
    client: Client,
}

impl OpenWeatherMapFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherFetcher for OpenWeatherMapFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchOutcome> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        drop(response);

        tracing::debug!("Forecast response status: {}", status);

        Ok(FetchOutcome {
            status: status.as_u16(),
            elapsed: start.elapsed(),
        })
    }
}
