use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tooling.
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

/// Top-level configuration for the reporting tools.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub listing: ListingConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("POINTWATCH_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level =
            env::var("POINTWATCH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let page_size = env::var("POINTWATCH_PAGE_SIZE")
            .unwrap_or_else(|_| ListingConfig::DEFAULT_PAGE_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidPageSize)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            listing: ListingConfig { page_size },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Defaults for the listing engine's pagination.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    pub page_size: usize,
}

impl ListingConfig {
    /// Every dashboard in the source system pages by twenty rows.
    pub const DEFAULT_PAGE_SIZE: usize = 20;
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPageSize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPageSize => {
                write!(f, "POINTWATCH_PAGE_SIZE must be a non-negative integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
