use std::time::Duration;

pub const DEFAULT_OWM_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresConfig {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub schema: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    pub base_url: String,
    pub api_key: String,
    pub lat: String,
    pub lon: String,
}

impl WeatherConfig {
    /// The forecast URL with every value embedded exactly as configured.
    pub fn forecast_url(&self) -> String {
        format!(
            "{}/forecast?lat={}&lon={}&appid={}",
            self.base_url.strip_suffix('/').unwrap_or(&self.base_url),
            self.lat,
            self.lon,
            self.api_key
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub postgres: PostgresConfig,
    pub weather: WeatherConfig,
}

/// Outcome of looking a secret up in the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Found(String),
    PromptRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOutcome {
    pub status: u16,
    pub elapsed: Duration,
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> WeatherConfig {
        WeatherConfig {
            base_url: DEFAULT_OWM_BASE_URL.to_string(),
            api_key: "abc123".to_string(),
            lat: "44.34".to_string(),
            lon: "10.99".to_string(),
        }
    }

    #[test]
    fn test_forecast_url_embeds_values_verbatim() {
        assert_eq!(
            weather().forecast_url(),
            "https://api.openweathermap.org/data/2.5/forecast?lat=44.34&lon=10.99&appid=abc123"
        );
    }

    #[test]
    fn test_forecast_url_keeps_unusual_values_untouched() {
        let config = WeatherConfig {
            lat: " -33.8688".to_string(),
            lon: "151.2093 ".to_string(),
            api_key: "k+y/=".to_string(),
            base_url: "http://localhost:9000/".to_string(),
        };
        assert_eq!(
            config.forecast_url(),
            "http://localhost:9000/forecast?lat= -33.8688&lon=151.2093 &appid=k+y/="
        );
    }

    #[test]
    fn test_forecast_url_strips_only_one_trailing_slash() {
        let mut config = weather();
        config.base_url = "http://x///".to_string();
        assert!(config
            .forecast_url()
            .starts_with("http://x//forecast?lat=44.34"));
    }

    #[test]
    fn test_fetch_outcome_success_range() {
        let ok = FetchOutcome { status: 204, elapsed: Duration::ZERO };
        let err = FetchOutcome { status: 401, elapsed: Duration::ZERO };
        assert!(ok.is_success());
        assert!(!err.is_success());
    }
}
