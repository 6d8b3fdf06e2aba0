use std::env;

use crate::form::ValidationConfig;

/// Distinguishes runtime behavior for different stages of the embedding app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Top-level configuration: environment stage, telemetry, and the validation
/// limit overrides.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub validation: ValidationConfig,
}

impl AppConfig {
    /// Load from the environment, falling back to the form defaults for any
    /// limit that is not overridden.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut validation = ValidationConfig::default();
        if let Some(value) = read_limit("FORM_MIN_AGE")? {
            validation.minimum_age = value as u32;
        }
        if let Some(value) = read_limit("FORM_MIN_PASSWORD_CHARS")? {
            validation.min_password_chars = value as usize;
        }
        if let Some(value) = read_limit("FORM_MAX_AVAILABLE_HOURS")? {
            validation.max_available_hours = value as u32;
        }
        if let Some(value) = read_limit("FORM_MAX_IMAGE_BYTES")? {
            validation.max_image_bytes = value;
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            validation,
        })
    }
}

fn read_limit(key: &'static str) -> Result<Option<u64>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidLimit { key, value: raw }),
        Err(_) => Ok(None),
    }
}

/// Configuration failure raised during [`AppConfig::load`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: expected a whole number")]
    InvalidLimit { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_labels_map_to_stages() {
        assert_eq!(AppEnvironment::from_str("production"), AppEnvironment::Production);
        assert_eq!(AppEnvironment::from_str("PROD"), AppEnvironment::Production);
        assert_eq!(AppEnvironment::from_str("ci"), AppEnvironment::Test);
        assert_eq!(AppEnvironment::from_str("anything"), AppEnvironment::Development);
    }

    #[test]
    fn invalid_limit_reports_key_and_value() {
        let error = ConfigError::InvalidLimit {
            key: "FORM_MIN_AGE",
            value: "twelve".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("FORM_MIN_AGE"));
        assert!(message.contains("twelve"));
    }
}
