use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Could not read secret from terminal: {0}")]
    PromptError(#[source] std::io::Error),

    #[error("Something went wrong connecting to the postgres database at host \"{host}\".\n{source}")]
    DatabaseConnectError {
        host: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Closing the postgres connection failed: {0}")]
    DatabaseCloseError(#[source] sqlx::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Database,
    Network,
    System,
}

impl AppError {
    pub fn missing(field: &str) -> Self {
        Self::MissingConfigError {
            field: field.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::PromptError(_) => ErrorCategory::Configuration,
            Self::DatabaseConnectError { .. } | Self::DatabaseCloseError(_) => {
                ErrorCategory::Database
            }
            Self::ApiError(_) => ErrorCategory::Network,
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    /// Process exit status for an error that aborts the run.
    ///
    /// Weather and close failures never abort, so they map to 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ApiError(_) | Self::DatabaseCloseError(_) => 0,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingConfigError { field } => {
                format!("The environment variable {field} has not been set.")
            }
            Self::InvalidConfigValueError { field, value, .. } => {
                format!("The environment variable {field} has an unusable value: {value}")
            }
            Self::PromptError(_) => "Could not read the secret from the terminal.".to_string(),
            Self::DatabaseConnectError { host, .. } => {
                format!("Could not connect to the postgres database at {host}.")
            }
            Self::DatabaseCloseError(_) => "The postgres connection did not close cleanly.".to_string(),
            Self::ApiError(_) => "The weather forecast request failed.".to_string(),
            Self::IoError(e) => format!("File system error: {e}"),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::MissingConfigError { field } => {
                format!("Export {field} in your shell or add it to a .env file")
            }
            Self::InvalidConfigValueError { reason, .. } => reason.clone(),
            Self::PromptError(_) => {
                "Set the secret as an environment variable, or run from an interactive terminal"
                    .to_string()
            }
            Self::DatabaseConnectError { .. } => {
                "Check POSTGRES_HOST, POSTGRES_PORT and the credentials, and that the server accepts connections"
                    .to_string()
            }
            Self::DatabaseCloseError(_) => "No action needed".to_string(),
            Self::ApiError(_) => {
                "Check network access to OpenWeatherMap and the API key".to_string()
            }
            Self::IoError(_) => "Check permissions on the log directory".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_exit_with_one() {
        assert_eq!(AppError::missing("POSTGRES_HOST").exit_code(), 1);
        assert_eq!(
            AppError::missing("POSTGRES_HOST").category(),
            ErrorCategory::Configuration
        );

        let invalid = AppError::InvalidConfigValueError {
            field: "POSTGRES_PORT".to_string(),
            value: "abc".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(invalid.exit_code(), 1);
        assert_eq!(invalid.recovery_suggestion(), "not a number");
    }

    #[test]
    fn test_database_connect_message_names_host() {
        let err = AppError::DatabaseConnectError {
            host: "unreachable".to_string(),
            source: sqlx::Error::PoolTimedOut,
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.category(), ErrorCategory::Database);
        assert!(err.to_string().contains("host \"unreachable\""));
    }

    #[test]
    fn test_close_failure_does_not_change_exit_status() {
        let err = AppError::DatabaseCloseError(sqlx::Error::PoolClosed);
        assert_eq!(err.exit_code(), 0);
    }
}
