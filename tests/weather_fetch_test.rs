use httpmock::prelude::*;
use weather_to_postgres::core::WeatherConfig;
use weather_to_postgres::domain::ports::WeatherFetcher;
use weather_to_postgres::{AppError, OpenWeatherMapFetcher};

fn config(base_url: String) -> WeatherConfig {
    WeatherConfig {
        base_url,
        api_key: "0123456789abcdef".to_string(),
        lat: "-33.8688".to_string(),
        lon: "151.2093".to_string(),
    }
}

#[tokio::test]
async fn test_fetch_sends_configured_query_once() -> anyhow::Result<()> {
    let server = MockServer::start();
    let forecast = server.mock(|when, then| {
        when.method(GET)
            .path("/forecast")
            .query_param("lat", "-33.8688")
            .query_param("lon", "151.2093")
            .query_param("appid", "0123456789abcdef");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "cod": "200", "cnt": 40, "list": [] }));
    });

    let url = config(server.base_url()).forecast_url();
    let outcome = OpenWeatherMapFetcher::new().fetch(&url).await?;

    forecast.assert_hits(1);
    assert_eq!(outcome.status, 200);
    assert!(outcome.is_success());
    Ok(())
}

#[tokio::test]
async fn test_fetch_reports_error_status_without_failing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/forecast");
        then.status(503).body("upstream unavailable");
    });

    let url = config(server.base_url()).forecast_url();
    let outcome = OpenWeatherMapFetcher::new().fetch(&url).await.unwrap();

    assert_eq!(outcome.status, 503);
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn test_fetch_connection_failure_is_api_error() {
    let url = config("http://127.0.0.1:1".to_string()).forecast_url();
    let err = OpenWeatherMapFetcher::new().fetch(&url).await.unwrap_err();

    assert!(matches!(err, AppError::ApiError(_)));
    assert_eq!(err.exit_code(), 0);
}
