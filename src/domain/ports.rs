use crate::domain::model::{FetchOutcome, PostgresConfig};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::env::VarError;

pub trait EnvSource: Send + Sync {
    /// `Ok(None)` when unset; an error when set but unusable.
    fn get(&self, name: &str) -> Result<Option<String>>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Result<Option<String>> {
        match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(raw)) => Err(AppError::InvalidConfigValueError {
                field: name.to_string(),
                value: raw.to_string_lossy().into_owned(),
                reason: "Value is not valid UTF-8".to_string(),
            }),
        }
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Result<Option<String>> {
        Ok(HashMap::get(self, name).cloned())
    }
}

pub trait SecretPrompter: Send + Sync {
    /// Shows `message` and reads one line without echoing it.
    fn prompt_secret(&self, name: &str, message: &str) -> Result<String>;
}

#[async_trait]
pub trait DatabaseConnector: Send + Sync {
    async fn connect(&self, config: &PostgresConfig) -> Result<Box<dyn DatabaseConnection>>;
}

#[async_trait]
pub trait DatabaseConnection: Send {
    async fn close(self: Box<Self>) -> Result<()>;
}

#[async_trait]
pub trait WeatherFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_env_unset_is_none() {
        let value = ProcessEnv
            .get("WEATHER_TO_POSTGRES_TEST_DEFINITELY_UNSET")
            .unwrap();
        assert!(value.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_process_env_non_utf8_is_invalid_not_missing() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = "WEATHER_TO_POSTGRES_TEST_NON_UTF8";
        std::env::set_var(name, OsStr::from_bytes(b"f\xffo"));
        let result = ProcessEnv.get(name);
        std::env::remove_var(name);

        match result {
            Err(AppError::InvalidConfigValueError { field, .. }) => assert_eq!(field, name),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
