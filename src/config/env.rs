//! Builds [`AppConfig`] from environment variables.
//!
//! The two secrets may be typed in at a prompt when they are unset and the
//! run is interactive. Every other variable is required outright.

use crate::domain::model::{
    AppConfig, PostgresConfig, Resolved, WeatherConfig, DEFAULT_OWM_BASE_URL,
};
use crate::domain::ports::{EnvSource, SecretPrompter};
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{parse_port, validate_required_field, validate_url, Validate};

pub const POSTGRES_USERNAME: &str = "POSTGRES_USERNAME";
pub const POSTGRES_PASSWORD: &str = "POSTGRES_PASSWORD";
pub const POSTGRES_HOST: &str = "POSTGRES_HOST";
pub const POSTGRES_PORT: &str = "POSTGRES_PORT";
pub const POSTGRES_DATABASE: &str = "POSTGRES_DATABASE";
pub const POSTGRES_SCHEMA: &str = "POSTGRES_SCHEMA";
pub const OPENWEATHERMAP_API_KEY: &str = "OPENWEATHERMAP_API_KEY";
pub const OPENWEATHERMAP_LAT: &str = "OPENWEATHERMAP_LAT";
pub const OPENWEATHERMAP_LON: &str = "OPENWEATHERMAP_LON";
pub const OPENWEATHERMAP_BASE_URL: &str = "OPENWEATHERMAP_BASE_URL";

const POSTGRES_PASSWORD_HELP: &str = "The OS environment variable POSTGRES_PASSWORD has not been set. \
It's used to retrieve the Postgres password we use to connect. \
You can enter it now, or exit with CTRL+C.";

const OPENWEATHERMAP_API_KEY_HELP: &str = "The OS environment variable OPENWEATHERMAP_API_KEY has not been set. \
It's used to authenticate against the Open Weather Map API. \
You can enter it now, or exit with CTRL+C.";

pub fn resolve_secret(env: &dyn EnvSource, name: &str) -> Result<Resolved> {
    Ok(match env.get(name)? {
        Some(value) => Resolved::Found(value),
        None => Resolved::PromptRequired,
    })
}

pub struct ConfigLoader<'a> {
    env: &'a dyn EnvSource,
    prompter: &'a dyn SecretPrompter,
    interactive: bool,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(env: &'a dyn EnvSource, prompter: &'a dyn SecretPrompter, interactive: bool) -> Self {
        Self {
            env,
            prompter,
            interactive,
        }
    }

    /// Plain variables are all checked before either secret is prompted for.
    pub fn load(&self) -> Result<AppConfig> {
        let username = self.required(POSTGRES_USERNAME)?;
        let host = self.required(POSTGRES_HOST)?;
        let port = parse_port(POSTGRES_PORT, &self.required(POSTGRES_PORT)?)?;
        let database = self.required(POSTGRES_DATABASE)?;
        let schema = self.required(POSTGRES_SCHEMA)?;
        let lat = self.required(OPENWEATHERMAP_LAT)?;
        let lon = self.required(OPENWEATHERMAP_LON)?;
        let base_url = self
            .env
            .get(OPENWEATHERMAP_BASE_URL)?
            .unwrap_or_else(|| DEFAULT_OWM_BASE_URL.to_string());

        let password = self.secret(POSTGRES_PASSWORD, POSTGRES_PASSWORD_HELP)?;
        let api_key = self.secret(OPENWEATHERMAP_API_KEY, OPENWEATHERMAP_API_KEY_HELP)?;

        let config = AppConfig {
            postgres: PostgresConfig {
                username,
                password,
                host,
                port,
                database,
                schema,
            },
            weather: WeatherConfig {
                base_url,
                api_key,
                lat,
                lon,
            },
        };
        config.validate()?;
        Ok(config)
    }

    fn required(&self, name: &str) -> Result<String> {
        validate_required_field(name, self.env.get(name)?)
    }

    fn secret(&self, name: &str, help: &str) -> Result<String> {
        match resolve_secret(self.env, name)? {
            Resolved::Found(value) => Ok(value),
            Resolved::PromptRequired if self.interactive => {
                tracing::debug!("{} unset, prompting", name);
                self.prompter.prompt_secret(name, help)
            }
            Resolved::PromptRequired => Err(AppError::missing(name)),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url(OPENWEATHERMAP_BASE_URL, &self.weather.base_url)
    }
}
